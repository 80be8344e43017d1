//! Signs, hemispheres and axes of a coordinate

use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{bool_enum, errors::OutOfRange};

bool_enum!(
    /// The sign of a coordinate: `Positive` for northern and eastern values,
    /// `Negative` for southern and western ones.
    ///
    /// An unknown direction is represented with `Option<Direction>::None`.
    Direction: Positive and Negative; parse from '+':'-' with ParseDirectionError
);

impl Direction {
    /// The direction of the given decimal value (zero is positive)
    pub fn of(value: f64) -> Self {
        Self::from(value.is_sign_positive())
    }

    /// The multiplier to apply to a magnitude
    pub const fn signum(self) -> f64 {
        match self {
            Positive => 1.0,
            Negative => -1.0,
        }
    }
}

/// One of the two angular components of a coordinate pair
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// North-south position, `0..=90` degrees in each hemisphere
    Latitude,
    /// East-west position, `0..=180` degrees in each hemisphere
    Longitude,
}

impl Axis {
    /// The biggest magnitude (in degrees) a coordinate on the axis can have
    pub const fn max_degrees(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// The error to report when the magnitude exceeds the axis bound
    pub const fn overflow(self) -> OutOfRange {
        match self {
            Self::Latitude => OutOfRange::ObtuseAngle,
            Self::Longitude => OutOfRange::ReflexAngle,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}

/// The letter denoting both the axis and the sign of a coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// `N`
    North,
    /// `S`
    South,
    /// `E`
    East,
    /// `W`
    West,
}

impl Hemisphere {
    /// Latitude for `N` and `S`, longitude for `E` and `W`
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// Positive for `N` and `E`, negative for `S` and `W`
    pub const fn direction(self) -> Direction {
        match self {
            Self::North | Self::East => Positive,
            Self::South | Self::West => Negative,
        }
    }

    /// The hemisphere on the given axis the direction points to
    pub const fn with_axis_and_direction(axis: Axis, direction: Direction) -> Self {
        match (axis, direction) {
            (Axis::Latitude, Positive) => Self::North,
            (Axis::Latitude, Negative) => Self::South,
            (Axis::Longitude, Positive) => Self::East,
            (Axis::Longitude, Negative) => Self::West,
        }
    }

    /// Upper-case letter of the hemisphere
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The character is none of `N`, `S`, `E`, `W`
pub struct ParseHemisphereError {
    failed: char,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Hemisphere from {:?}", self.failed)
    }
}

impl Error for ParseHemisphereError {}

impl TryFrom<char> for Hemisphere {
    type Error = ParseHemisphereError;

    /// The letters are case-insensitive
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(ParseHemisphereError { failed: c }),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
