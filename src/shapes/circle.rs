use crate::config::DEFAULT_MASS;
use crate::error::CollisionError;
use crate::math::vec2::Vec2;

use super::{validate_extent, Body};

/// A circular sprite anchored at the top-left corner of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub velocity: Option<Vec2>,
    diameter: f64,
    mass: f64,
}

impl Circle {
    /// Creates a stationary circle with the default mass.
    pub fn new(position: Vec2, diameter: f64) -> Result<Self, CollisionError> {
        Ok(Self {
            position,
            velocity: None,
            diameter: validate_extent("diameter", diameter)?,
            mass: DEFAULT_MASS,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Sets the mass used to dampen bounces. Must be at least 1.
    pub fn with_mass(mut self, mass: f64) -> Result<Self, CollisionError> {
        if !(mass.is_finite() && mass >= 1.0) {
            return Err(CollisionError::InvalidShape(format!(
                "mass must be at least 1, got {mass}"
            )));
        }
        self.mass = mass;
        Ok(self)
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), CollisionError> {
        self.diameter = validate_extent("diameter", diameter)?;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

impl Body for Circle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    fn width(&self) -> f64 {
        self.diameter
    }

    fn height(&self) -> f64 {
        self.diameter
    }

    fn velocity(&self) -> Option<Vec2> {
        self.velocity
    }

    fn velocity_mut(&mut self) -> Option<&mut Vec2> {
        self.velocity.as_mut()
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}
