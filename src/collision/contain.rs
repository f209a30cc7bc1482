//! Keeping a body inside a rectangular region.

use tracing::trace;

use crate::shapes::Body;

use super::aabb::AABB;
use super::outcome::Side;

/// Clamps the body so its bounding box stays inside `bounds`.
///
/// Edges are checked independently in the order left, top, right, bottom, so
/// a body past a corner is corrected on both axes and the last edge checked
/// is the side returned. With `bounce`, the velocity component for each
/// violated edge is negated.
pub fn contain_in_bounds(body: &mut impl Body, bounds: &AABB, bounce: bool) -> Option<Side> {
    contain_in_bounds_with(body, bounds, bounce, |_| {})
}

/// Like [`contain_in_bounds`], calling `on_collide` with the returned side
/// when the body had to be moved.
pub fn contain_in_bounds_with<F>(
    body: &mut impl Body,
    bounds: &AABB,
    bounce: bool,
    mut on_collide: F,
) -> Option<Side>
where
    F: FnMut(Side),
{
    let width = body.width();
    let height = body.height();
    let mut collision = None;

    if body.position().x < bounds.min.x {
        flip_x(body, bounce);
        body.position_mut().x = bounds.min.x;
        collision = Some(Side::Left);
    }
    if body.position().y < bounds.min.y {
        flip_y(body, bounce);
        body.position_mut().y = bounds.min.y;
        collision = Some(Side::Top);
    }
    if body.position().x + width > bounds.max.x {
        flip_x(body, bounce);
        body.position_mut().x = bounds.max.x - width;
        collision = Some(Side::Right);
    }
    if body.position().y + height > bounds.max.y {
        flip_y(body, bounce);
        body.position_mut().y = bounds.max.y - height;
        collision = Some(Side::Bottom);
    }

    if let Some(side) = collision {
        trace!(%side, "contained body");
        on_collide(side);
    }
    collision
}

fn flip_x(body: &mut impl Body, bounce: bool) {
    if bounce {
        if let Some(velocity) = body.velocity_mut() {
            velocity.x = -velocity.x;
        }
    }
}

fn flip_y(body: &mut impl Body, bounce: bool) {
    if bounce {
        if let Some(velocity) = body.velocity_mut() {
            velocity.y = -velocity.y;
        }
    }
}
