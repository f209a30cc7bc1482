//! Collision detection and response for 2D sprites.
//!
//! Shapes are owned by the caller; every function here reads their geometry
//! and writes `position` and `velocity` in place. Nothing is cached between
//! calls.
//!
//! ```
//! use sprite_collision::{hit, Body, Collision, HitOptions, Rectangle, Shape, Side, Target, Vec2};
//!
//! let mut player: Shape = Rectangle::new(Vec2::new(0.0, 0.0), 10.0, 10.0)?.into();
//! let mut wall: Shape = Rectangle::new(Vec2::new(8.0, 2.0), 10.0, 10.0)?.into();
//!
//! let collision = hit(Target::Shape(&mut player), Target::Shape(&mut wall), &HitOptions::reacting(false))?;
//! assert_eq!(collision, Some(Collision::Side(Side::Right)));
//! assert_eq!(player.position(), Vec2::new(-2.0, 0.0));
//! # Ok::<(), sprite_collision::CollisionError>(())
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{
    bounce_off_surface, circles_overlap, contain_in_bounds, contain_in_bounds_with, hit,
    hit_test_tile, hit_with, point_in_circle, point_in_rectangle, point_in_shape,
    rectangles_overlap, resolve_circle_overlap, resolve_moving_circles_collision,
    resolve_rectangle_overlap, Collision, Side, Target, TileHit, TileMap, AABB,
};
pub use config::{CircleBounceMode, HitOptions, PointsToCheck};
pub use error::CollisionError;
pub use math::vec2::Vec2;
pub use shapes::{Body, Circle, Point, Rectangle, Shape};
