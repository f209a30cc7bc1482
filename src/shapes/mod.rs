//! Shape types and the geometry accessors every collision routine reads.

pub mod circle;
pub mod motion;
pub mod rectangle;

pub use circle::Circle;
pub use motion::{advance, advance_all, angle, distance, ease, follow};
pub use rectangle::Rectangle;

use crate::collision::AABB;
use crate::config::DEFAULT_MASS;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;

/// A bare position, used for point-in-shape tests.
pub type Point = Vec2;

/// Geometry shared by everything the collision core can move.
///
/// `position` is the top-left anchor. The center and half extents are
/// always derived from it, never stored, so moving a body is just a matter
/// of writing `position`.
pub trait Body {
    fn position(&self) -> Vec2;
    fn position_mut(&mut self) -> &mut Vec2;

    /// Width of the body's bounding box.
    fn width(&self) -> f64;
    /// Height of the body's bounding box.
    fn height(&self) -> f64;

    /// `None` for bodies that never move.
    fn velocity(&self) -> Option<Vec2>;
    fn velocity_mut(&mut self) -> Option<&mut Vec2>;

    fn mass(&self) -> f64 {
        DEFAULT_MASS
    }

    fn half_width(&self) -> f64 {
        self.width() / 2.0
    }

    fn half_height(&self) -> f64 {
        self.height() / 2.0
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width(), self.half_height())
    }

    fn center(&self) -> Vec2 {
        self.position() + self.half_extents()
    }

    /// The body's bounding box in world space.
    fn bounds(&self) -> AABB {
        let min = self.position();
        AABB::new(min, min + Vec2::new(self.width(), self.height()))
    }

    /// True when the body has a velocity that isn't exactly zero.
    fn is_moving(&self) -> bool {
        self.velocity().is_some_and(|v| v != Vec2::ZERO)
    }
}

/// Enum representing every shape kind the dispatcher understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    /// Short name used in error messages and log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
        }
    }

    pub fn as_circle(&self) -> Result<&Circle, CollisionError> {
        match self {
            Shape::Circle(c) => Ok(c),
            Shape::Rectangle(_) => Err(missing_radius()),
        }
    }

    pub fn as_circle_mut(&mut self) -> Result<&mut Circle, CollisionError> {
        match self {
            Shape::Circle(c) => Ok(c),
            Shape::Rectangle(_) => Err(missing_radius()),
        }
    }

    pub fn as_rectangle(&self) -> Result<&Rectangle, CollisionError> {
        match self {
            Shape::Rectangle(r) => Ok(r),
            Shape::Circle(_) => Err(missing_extents()),
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Result<&mut Rectangle, CollisionError> {
        match self {
            Shape::Rectangle(r) => Ok(r),
            Shape::Circle(_) => Err(missing_extents()),
        }
    }
}

fn missing_radius() -> CollisionError {
    CollisionError::MissingCapability {
        operation: "circle collision",
        capability: "a diameter",
    }
}

fn missing_extents() -> CollisionError {
    CollisionError::MissingCapability {
        operation: "rectangle collision",
        capability: "width and height",
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl Body for Shape {
    fn position(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.position(),
            Shape::Rectangle(r) => r.position(),
        }
    }

    fn position_mut(&mut self) -> &mut Vec2 {
        match self {
            Shape::Circle(c) => c.position_mut(),
            Shape::Rectangle(r) => r.position_mut(),
        }
    }

    fn width(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.width(),
            Shape::Rectangle(r) => r.width(),
        }
    }

    fn height(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.height(),
            Shape::Rectangle(r) => r.height(),
        }
    }

    fn velocity(&self) -> Option<Vec2> {
        match self {
            Shape::Circle(c) => c.velocity(),
            Shape::Rectangle(r) => r.velocity(),
        }
    }

    fn velocity_mut(&mut self) -> Option<&mut Vec2> {
        match self {
            Shape::Circle(c) => c.velocity_mut(),
            Shape::Rectangle(r) => r.velocity_mut(),
        }
    }

    fn mass(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.mass(),
            Shape::Rectangle(r) => r.mass(),
        }
    }
}

/// Checks a size field before it is stored on a shape.
pub(crate) fn validate_extent(name: &str, value: f64) -> Result<f64, CollisionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CollisionError::InvalidShape(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}
