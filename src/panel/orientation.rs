//! Screen edge orientation

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

/// Screen edge the panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// All orientations for iteration
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Returns the axis the panel bar runs along
    ///
    /// The dashboard slides along the other axis.
    pub fn axis(&self) -> Axis {
        match self {
            Orientation::North | Orientation::South => Axis::Horizontal,
            Orientation::East | Orientation::West => Axis::Vertical,
        }
    }

    /// Config-file spelling of this orientation
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Orientation::North),
            "south" => Ok(Orientation::South),
            "east" => Ok(Orientation::East),
            "west" => Ok(Orientation::West),
            _ => Err(ConfigError::InvalidOrientation(s.to_string())),
        }
    }
}

/// Axis a bar runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(&self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
