use std::{error::Error, fmt, num::ParseFloatError};

use crate::{
    angular::Notation,
    direction::{Axis, Hemisphere},
    enum_trivial_from_impl,
};

/// The part of an angle exceeding its bound
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutOfRange {
    /// Negative or not finite degrees
    Degrees,
    /// More than 90 degrees of latitude
    ObtuseAngle,
    /// More than 180 degrees
    ReflexAngle,
    /// Minutes not below 60
    ArcMinutes,
    /// Seconds not below 60
    ArcSeconds,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Degrees => "Degrees part of an angle should be a non-negative finite number",
            Self::ObtuseAngle => {
                "Only right angles or less (<=90) are allowed for latitude, but obtuse one provided"
            }
            Self::ReflexAngle => {
                "Only straight angles or less (<=180) are allowed, but reflex one provided"
            }
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

/// Every way the conversion of a coordinate string can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    /// Nothing but whitespace and separators
    EmptyString,
    /// The hemisphere letter is neither the first nor the last character
    MalformedAxis {
        /// the text of the offending axis
        axis: String,
    },
    /// Neither a hemisphere letter nor a comma separates the latitude from the longitude
    UnsplittablePair {
        /// the whole input
        input: String,
    },
    /// The component is not a plain unsigned decimal number
    /// or it is a fractional one followed by another component
    InvalidNumericToken {
        /// the offending component
        token: String,
    },
    /// this variant is practically impossible due to the token validation
    Float(ParseFloatError),
    /// More than degrees, minutes and seconds
    TooManyTokens(usize),
    /// Some component or the whole value exceeds its bound
    Range(OutOfRange),
    /// The entry point does not accept the given notation
    Notation {
        /// the notation actually found
        found: Notation,
    },
    /// The hemisphere letter belongs to the other axis
    AxisMismatch {
        /// the axis of the pair's half
        expected: Axis,
        /// the letter actually found
        found: Hemisphere,
    },
    /// The angular coordinate has no degrees
    Unset,
    /// The angular coordinate has seconds but no minutes
    MissingMinutes,
}

enum_trivial_from_impl!(OutOfRange => ParseCoordinateError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::MalformedAxis { axis } => write!(
                f,
                "hemisphere letter should be the first or the last character of {axis:?}"
            ),
            Self::UnsplittablePair { input } => write!(
                f,
                "cannot split {input:?} into latitude and longitude"
            ),
            Self::InvalidNumericToken { token } => write!(f, "{token:?} is not a valid number"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::TooManyTokens(count) => write!(
                f,
                "expected at most degrees, minutes and seconds, but {count} numbers found"
            ),
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Notation { found } => write!(f, "{found} notation is not supported here"),
            Self::AxisMismatch { expected, found } => {
                write!(f, "hemisphere {found} cannot denote a {expected}")
            }
            Self::Unset => write!(f, "no degrees in the angular coordinate"),
            Self::MissingMinutes => write!(f, "seconds provided without minutes"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Range(inner) => Some(inner),
            _ => None,
        }
    }
}
