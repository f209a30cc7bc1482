//! Error types surfaced by the collision core.

use thiserror::Error;

/// Failures reported to the calling frame-update code.
///
/// All of these are developer-facing: they point at an incorrect game setup
/// rather than a transient runtime condition, so nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// The dispatcher could not classify the pair it was handed.
    #[error("{a} and {b} cannot be used together in a collision test")]
    IncompatibleShapes { a: &'static str, b: &'static str },

    /// A zero-length vector would have had to be normalized.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// The shape lacks a field the requested operation needs.
    #[error("{operation} requires a shape with {capability}")]
    MissingCapability {
        operation: &'static str,
        capability: &'static str,
    },

    /// Constructor validation failed.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
}
