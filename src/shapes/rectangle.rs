use crate::error::CollisionError;
use crate::math::vec2::Vec2;

use super::{validate_extent, Body};

/// An axis-aligned rectangular sprite anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub position: Vec2,
    pub velocity: Option<Vec2>,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(position: Vec2, width: f64, height: f64) -> Result<Self, CollisionError> {
        Ok(Self {
            position,
            velocity: None,
            width: validate_extent("width", width)?,
            height: validate_extent("height", height)?,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), CollisionError> {
        let width = validate_extent("width", width)?;
        self.height = validate_extent("height", height)?;
        self.width = width;
        Ok(())
    }
}

impl Body for Rectangle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn velocity(&self) -> Option<Vec2> {
        self.velocity
    }

    fn velocity_mut(&mut self) -> Option<&mut Vec2> {
        self.velocity.as_mut()
    }
}
