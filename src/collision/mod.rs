pub mod aabb;
pub mod bounce;
pub mod contain;
pub mod detection;
pub mod dispatch;
pub mod outcome;
pub mod resolution;
pub mod tile;

// Re-export key types
pub use aabb::AABB;
pub use bounce::{bounce_off_surface, resolve_moving_circles_collision};
pub use contain::{contain_in_bounds, contain_in_bounds_with};
pub use detection::{
    circles_overlap, point_in_circle, point_in_rectangle, point_in_shape, rectangles_overlap,
};
pub use dispatch::{hit, hit_with, Target};
pub use outcome::{Collision, Side, TileHit};
pub use resolution::{resolve_circle_overlap, resolve_rectangle_overlap};
pub use tile::{hit_test_tile, TileMap};
