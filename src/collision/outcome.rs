use std::fmt;

use serde::{Deserialize, Serialize};

/// The edge of a rectangle or containing region a collision happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// What a dispatched collision check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// The shapes touched; no side information is available.
    Hit,
    /// A rectangle was pushed out through this side.
    Side(Side),
}

impl Collision {
    pub fn side(&self) -> Option<Side> {
        match self {
            Collision::Hit => None,
            Collision::Side(side) => Some(*side),
        }
    }
}

impl From<Side> for Collision {
    fn from(side: Side) -> Self {
        Collision::Side(side)
    }
}

/// Result of a tile-map hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileHit {
    pub hit: bool,
    /// Map index of the last sample point examined. Points left of or above
    /// the map produce negative indices.
    pub index: i64,
}
