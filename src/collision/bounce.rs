//! Velocity reflection off arbitrary surfaces and two-body circle response.

use tracing::{trace, warn};

use crate::config::DEGENERATE_EPSILON;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use crate::shapes::{Body, Circle};

/// Reflects a body's velocity off a surface.
///
/// `surface` runs along the surface being hit. The component of the velocity
/// along the surface is kept, the component along the surface's left normal
/// is reversed, and the result is divided by the body's mass.
///
/// A zero-length surface leaves the velocity untouched and returns
/// [`CollisionError::DegenerateGeometry`].
pub fn bounce_off_surface(body: &mut impl Body, surface: Vec2) -> Result<(), CollisionError> {
    let magnitude = surface.magnitude();
    if magnitude <= DEGENERATE_EPSILON {
        return Err(CollisionError::DegenerateGeometry(
            "bounce surface has zero length",
        ));
    }

    let mass = body.mass();
    let velocity = body
        .velocity_mut()
        .ok_or(CollisionError::MissingCapability {
            operation: "bounce_off_surface",
            capability: "a velocity",
        })?;

    let direction = surface / magnitude;
    let left_normal = surface.left_normal() / magnitude;

    let along = velocity.project_onto_unit(direction);
    let across = velocity.project_onto_unit(left_normal);

    *velocity = (along - across) / mass;
    Ok(())
}

/// Elastic collision between two moving circles.
///
/// Both circles are pushed apart by half the overlap each. Their velocities
/// then trade the components along the line of impact while each keeps its
/// own tangential component, and each result is divided by that circle's
/// mass. Returns `Ok(false)` without touching anything if they don't overlap.
///
/// Concentric circles are separated along [`Vec2::DOWN`] with no velocity
/// exchange.
pub fn resolve_moving_circles_collision(
    c1: &mut Circle,
    c2: &mut Circle,
) -> Result<bool, CollisionError> {
    let (Some(v1), Some(v2)) = (c1.velocity, c2.velocity) else {
        return Err(CollisionError::MissingCapability {
            operation: "resolve_moving_circles_collision",
            capability: "a velocity",
        });
    };

    let v = c1.center() - c2.center();
    let magnitude = v.magnitude();
    let combined_radii = c1.radius() + c2.radius();

    if magnitude >= combined_radii {
        return Ok(false);
    }

    let overlap = combined_radii - magnitude;

    let Some(direction) = v.try_normalize(DEGENERATE_EPSILON) else {
        warn!(overlap, "concentric moving circles, separating along fallback axis");
        let half = Vec2::DOWN * (overlap / 2.0);
        c1.position -= half;
        c2.position += half;
        return Ok(true);
    };

    // `direction` points from c2 to c1, so this moves each circle away from the other.
    let half = direction * (overlap / 2.0);
    c1.position += half;
    c2.position -= half;

    let left_normal = v.left_normal() / magnitude;

    let p1_along = v1.project_onto_unit(direction);
    let p1_across = v1.project_onto_unit(left_normal);
    let p2_along = v2.project_onto_unit(direction);
    let p2_across = v2.project_onto_unit(left_normal);

    c1.velocity = Some((p1_across + p2_along) / c1.mass());
    c2.velocity = Some((p1_along + p2_across) / c2.mass());

    trace!(overlap, "resolved moving circles collision");
    Ok(true)
}
