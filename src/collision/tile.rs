//! Hit tests between a shape and cells of a row-major tile map.

use tracing::trace;

use crate::config::{PointsToCheck, TILE_EDGE_INSET};
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use crate::shapes::{Body, Point};

use super::outcome::TileHit;

/// A read-only view of a flat, row-major array of tile ids.
#[derive(Debug, Clone, Copy)]
pub struct TileMap<'a> {
    tiles: &'a [u32],
    width: usize,
    tile_width: f64,
    tile_height: f64,
}

impl<'a> TileMap<'a> {
    /// # Arguments
    /// * `tiles` - Tile ids, one row after another.
    /// * `width` - Number of columns in the map.
    /// * `tile_width`, `tile_height` - Size of one tile in pixels.
    pub fn new(
        tiles: &'a [u32],
        width: usize,
        tile_width: f64,
        tile_height: f64,
    ) -> Result<Self, CollisionError> {
        if width == 0 {
            return Err(CollisionError::InvalidShape(
                "tile map must have at least one column".to_string(),
            ));
        }
        if !(tile_width.is_finite() && tile_width > 0.0 && tile_height.is_finite() && tile_height > 0.0) {
            return Err(CollisionError::InvalidShape(format!(
                "tile size must be positive, got {tile_width}x{tile_height}"
            )));
        }
        Ok(Self {
            tiles,
            width,
            tile_width,
            tile_height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tiles(&self) -> &'a [u32] {
        self.tiles
    }

    /// Converts pixel coordinates to a map array index.
    ///
    /// The index isn't bounds-checked: points outside the map produce
    /// indices that [`get`](Self::get) rejects. Arithmetic saturates, so
    /// far-away or non-finite points land on `i64::MIN` or `i64::MAX`.
    pub fn index_at(&self, point: Point) -> i64 {
        if !point.is_finite() {
            return i64::MIN;
        }
        let column = (point.x / self.tile_width).floor() as i64;
        let row = (point.y / self.tile_height).floor() as i64;
        let width = i64::try_from(self.width).unwrap_or(i64::MAX);
        column.saturating_add(row.saturating_mul(width))
    }

    /// The tile id stored at `index`, if it is inside the map.
    pub fn get(&self, index: i64) -> Option<u32> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tiles.get(index).copied())
    }
}

/// Sample points for a tile test: the center, or the four corners with the
/// far edges pulled in by [`TILE_EDGE_INSET`].
fn sample_points(body: &impl Body, points_to_check: PointsToCheck) -> Vec<Point> {
    if points_to_check == PointsToCheck::Center {
        return vec![body.center()];
    }
    let top_left = body.position();
    let right = top_left.x + body.width() - TILE_EDGE_INSET;
    let bottom = top_left.y + body.height() - TILE_EDGE_INSET;
    vec![
        top_left,
        Vec2::new(right, top_left.y),
        Vec2::new(top_left.x, bottom),
        Vec2::new(right, bottom),
    ]
}

/// Checks whether the body's sample points land on tiles with id `tile_to_find`.
///
/// `Center` and `Some` hit if any sampled point matches, `Every` only if all
/// of them do. Checking stops as soon as the answer is known, and the
/// returned index is the index of the last point examined, which for a miss
/// under `Every` is the first corner that didn't match.
pub fn hit_test_tile(
    body: &impl Body,
    tile_to_find: u32,
    map: &TileMap<'_>,
    points_to_check: PointsToCheck,
) -> TileHit {
    let mut index = 0;
    let mut check = |point: &Point| {
        index = map.index_at(*point);
        map.get(index) == Some(tile_to_find)
    };

    let points = sample_points(body, points_to_check);
    let hit = match points_to_check {
        PointsToCheck::Center | PointsToCheck::Some => points.iter().any(&mut check),
        PointsToCheck::Every => points.iter().all(&mut check),
    };

    trace!(hit, index, ?points_to_check, "tile hit test");
    TileHit { hit, index }
}
