//! Static resolution: push the first shape out of a stationary second shape.

use tracing::{trace, warn};

use crate::config::{DEGENERATE_EPSILON, SLIPPERY_FRICTION};
use crate::math::vec2::Vec2;
use crate::shapes::{Body, Circle, Rectangle};

use super::bounce::bounce_off_surface;
use super::detection::combined_half_extents;
use super::outcome::Side;

/// Moves `c1` out of `c2`, treating `c2` as an immovable obstacle.
///
/// With `bounce`, `c1`'s velocity is reflected off the surface perpendicular
/// to the line between the centers. Without it the velocity is damped by
/// [`SLIPPERY_FRICTION`]. Returns true if the circles overlapped.
///
/// Concentric circles are separated along [`Vec2::DOWN`] and keep their
/// velocity unchanged.
///
/// Callers without a preference pass `bounce = true`.
pub fn resolve_circle_overlap(c1: &mut Circle, c2: &Circle, bounce: bool) -> bool {
    let v = c2.center() - c1.center();
    let magnitude = v.magnitude();
    let combined_radii = c1.radius() + c2.radius();

    if magnitude >= combined_radii {
        return false;
    }

    let overlap = combined_radii - magnitude;

    let Some(direction) = v.try_normalize(DEGENERATE_EPSILON) else {
        warn!(overlap, "concentric circles, separating along fallback axis");
        c1.position -= Vec2::DOWN * overlap;
        return true;
    };

    c1.position -= direction * overlap;

    if bounce && c1.velocity.is_some() {
        // The bounce surface runs perpendicular to the line between the centers.
        let surface = v.left_normal();
        if let Err(err) = bounce_off_surface(c1, surface) {
            warn!(%err, "skipping circle bounce");
        }
    } else if let Some(velocity) = c1.velocity.as_mut() {
        *velocity *= SLIPPERY_FRICTION;
    }

    trace!(overlap, bounce, "resolved circle overlap");
    true
}

/// Moves `r1` out of `r2` along the axis with the smaller penetration.
///
/// Returns the side of `r1` that was hit, or `None` if the rectangles don't
/// overlap (in which case nothing is mutated). When both penetrations are
/// equal the push happens vertically. With `bounce`, the velocity component
/// on the resolved axis is negated. Callers without a preference pass
/// `bounce = false`.
pub fn resolve_rectangle_overlap(r1: &mut Rectangle, r2: &Rectangle, bounce: bool) -> Option<Side> {
    let v = r1.center() - r2.center();
    let combined = combined_half_extents(r1, r2);

    if v.x.abs() >= combined.x || v.y.abs() >= combined.y {
        return None;
    }

    let overlap = combined - v.abs();

    let side = if overlap.x >= overlap.y {
        let side = if v.y > 0.0 {
            r1.position.y += overlap.y;
            Side::Top
        } else {
            r1.position.y -= overlap.y;
            Side::Bottom
        };
        if bounce {
            if let Some(velocity) = r1.velocity.as_mut() {
                velocity.y = -velocity.y;
            }
        }
        side
    } else {
        let side = if v.x > 0.0 {
            r1.position.x += overlap.x;
            Side::Left
        } else {
            r1.position.x -= overlap.x;
            Side::Right
        };
        if bounce {
            if let Some(velocity) = r1.velocity.as_mut() {
                velocity.x = -velocity.x;
            }
        }
        side
    };

    trace!(%side, overlap_x = overlap.x, overlap_y = overlap.y, "resolved rectangle overlap");
    Some(side)
}
