//! Boolean probes: point-in-shape and shape-overlap tests. Nothing here mutates.

use crate::math::vec2::Vec2;
use crate::shapes::{Body, Circle, Point, Rectangle, Shape};

/// True if the point lies strictly inside the body's bounding box.
///
/// A point exactly on an edge is not a hit, which keeps results stable
/// for sprites sitting on tile boundaries.
pub fn point_in_rectangle(point: Point, rectangle: &impl Body) -> bool {
    rectangle.bounds().contains_strict(point)
}

/// True if the point is strictly closer to the circle's center than its radius.
pub fn point_in_circle(point: Point, circle: &Circle) -> bool {
    point.distance(circle.center()) < circle.radius()
}

/// Point test against whichever kind of shape `shape` is.
pub fn point_in_shape(point: Point, shape: &Shape) -> bool {
    match shape {
        Shape::Circle(circle) => point_in_circle(point, circle),
        Shape::Rectangle(rectangle) => point_in_rectangle(point, rectangle),
    }
}

/// True if the distance between centers is less than the sum of the radii.
pub fn circles_overlap(c1: &Circle, c2: &Circle) -> bool {
    let magnitude = (c1.center() - c2.center()).magnitude();
    magnitude < c1.radius() + c2.radius()
}

/// True if the boxes overlap on both axes. Touching edges don't count.
pub fn rectangles_overlap(r1: &Rectangle, r2: &Rectangle) -> bool {
    let v = r1.center() - r2.center();
    let combined = combined_half_extents(r1, r2);
    v.x.abs() < combined.x && v.y.abs() < combined.y
}

pub(crate) fn combined_half_extents(a: &impl Body, b: &impl Body) -> Vec2 {
    a.half_extents() + b.half_extents()
}
