//! Option structs and tuning constants recognized by the collision entry points.

use serde::{Deserialize, Serialize};

/// Velocity damping applied when a circle is pushed out without bouncing.
pub const SLIPPERY_FRICTION: f64 = 0.9;

/// Vectors shorter than this are treated as zero-length.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// How far the far-edge sample points are pulled inside a shape for tile tests,
/// so a shape flush against a tile boundary does not sample the next tile.
pub const TILE_EDGE_INSET: f64 = 1.0;

/// Mass assumed for bodies that don't carry one.
pub const DEFAULT_MASS: f64 = 1.0;

/// Which sample points of a shape are checked against the tile map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsToCheck {
    /// Only the center point.
    Center,
    /// Any of the four corners.
    #[default]
    Some,
    /// All four corners.
    Every,
}

/// How the dispatcher maps its `bounce` flag onto the resolver for a
/// circle reacting against a circle that isn't moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleBounceMode {
    /// `bounce = true` bounces, `bounce = false` slides with friction.
    #[default]
    Direct,
    /// Older engines' mapping: `bounce = true` slides and `bounce = false` bounces.
    Inverted,
}

impl CircleBounceMode {
    /// The `bounce` argument handed to the circle resolver.
    pub fn resolver_bounce(self, bounce: bool) -> bool {
        match self {
            CircleBounceMode::Direct => bounce,
            CircleBounceMode::Inverted => !bounce,
        }
    }
}

/// Options for [`hit`](crate::collision::hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitOptions {
    /// Separate overlapping shapes instead of only reporting the overlap.
    pub react: bool,
    /// Reflect velocity when reacting.
    pub bounce: bool,
    /// How `bounce` is passed on when a circle reacts against a circle that
    /// isn't moving. See [`CircleBounceMode`].
    pub circle_bounce_mode: CircleBounceMode,
}

impl Default for HitOptions {
    fn default() -> Self {
        Self {
            react: false,
            bounce: false,
            circle_bounce_mode: CircleBounceMode::Direct,
        }
    }
}

impl HitOptions {
    /// Options that separate shapes, with the given bounce flag.
    pub fn reacting(bounce: bool) -> Self {
        Self {
            react: true,
            bounce,
            ..Self::default()
        }
    }
}
