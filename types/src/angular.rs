//! Angular (degrees, minutes, seconds) representation of a coordinate.
//!
//! Every numeric part is optional: a missing part is `None`, never a zero,
//! so that "no minutes written" stays distinguishable from "zero minutes".

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

const MINUTES_IN_DEGREE: f64 = 60.0;
const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

// snap away the float noise of the decomposition
// (1e-6 arcseconds is ~3cm on the ground)
const SECONDS_PRECISION: f64 = 1e6;
const MINUTES_PRECISION: f64 = SECONDS_PRECISION * SECONDS_IN_MINUTE;

/// The granularity an angle is written with.
/// Only the last written part may carry a decimal fraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// `40.446195`
    Degrees,
    /// `40° 26.7717`
    DegreesMinutes,
    /// `40:26:46.302`
    DegreesMinutesSeconds,
}

impl Notation {
    /// How many numbers the notation is made of
    pub const fn parts(self) -> usize {
        match self {
            Self::Degrees => 1,
            Self::DegreesMinutes => 2,
            Self::DegreesMinutesSeconds => 3,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degrees => "decimal degrees",
            Self::DegreesMinutes => "degrees and decimal minutes",
            Self::DegreesMinutesSeconds => "degrees, minutes and seconds",
        };
        write!(f, "{name}")
    }
}

/// A latitude or a longitude in the angular form.
///
/// The parts are magnitudes, the sign lives in the `direction`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularCoordinate {
    /// Whole (or decimal, when nothing follows) degrees
    pub degrees: Option<f64>,
    /// Arc minutes in the range `[0..60)`
    pub minutes: Option<f64>,
    /// Arc seconds in the range `[0..60)`
    pub seconds: Option<f64>,
    /// `None` when neither a hemisphere letter nor a sign was given
    pub direction: Option<Direction>,
}

impl AngularCoordinate {
    /// No coordinate at all
    pub const fn unset() -> Self {
        Self {
            degrees: None,
            minutes: None,
            seconds: None,
            direction: None,
        }
    }

    /// Decimal degrees
    pub const fn with_degrees(degrees: f64, direction: Option<Direction>) -> Self {
        Self {
            degrees: Some(degrees),
            minutes: None,
            seconds: None,
            direction,
        }
    }

    /// Degrees and decimal minutes
    pub const fn with_dm(degrees: f64, minutes: f64, direction: Option<Direction>) -> Self {
        Self {
            degrees: Some(degrees),
            minutes: Some(minutes),
            seconds: None,
            direction,
        }
    }

    /// Degrees, minutes and seconds
    pub const fn with_dms(
        degrees: f64,
        minutes: f64,
        seconds: f64,
        direction: Option<Direction>,
    ) -> Self {
        Self {
            degrees: Some(degrees),
            minutes: Some(minutes),
            seconds: Some(seconds),
            direction,
        }
    }

    /// Split the signed decimal degrees into the parts of the given notation.
    ///
    /// ```
    /// # use coord_parse_types::{AngularCoordinate, Direction, Notation};
    /// let c = AngularCoordinate::with_decimal(-79.948_75, Notation::DegreesMinutesSeconds);
    ///
    /// assert_eq!(c.degrees, Some(79.0));
    /// assert_eq!(c.minutes, Some(56.0));
    /// assert!((c.seconds.unwrap() - 55.5).abs() < 1e-6);
    /// assert_eq!(c.direction, Some(Direction::Negative));
    /// ```
    pub fn with_decimal(value: f64, notation: Notation) -> Self {
        let direction = Some(Direction::of(value));
        let magnitude = value.abs();

        match notation {
            Notation::Degrees => Self::with_degrees(magnitude, direction),
            Notation::DegreesMinutes => {
                let total_minutes = snap(magnitude * MINUTES_IN_DEGREE, MINUTES_PRECISION);
                let degrees = (total_minutes / MINUTES_IN_DEGREE).floor();
                let minutes = total_minutes - degrees * MINUTES_IN_DEGREE;
                Self::with_dm(degrees, minutes, direction)
            }
            Notation::DegreesMinutesSeconds => {
                let total_seconds = snap(magnitude * SECONDS_IN_DEGREE, SECONDS_PRECISION);
                let degrees = (total_seconds / SECONDS_IN_DEGREE).floor();
                let rest = total_seconds - degrees * SECONDS_IN_DEGREE;
                let minutes = (rest / SECONDS_IN_MINUTE).floor();
                let seconds = rest - minutes * SECONDS_IN_MINUTE;
                Self::with_dms(degrees, minutes, seconds, direction)
            }
        }
    }

    /// Nothing was parsed into the coordinate
    pub fn is_unset(&self) -> bool {
        self.degrees.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
            && self.direction.is_none()
    }

    /// The notation matching the parts present.
    /// `None` for an incomplete coordinate (no degrees, or seconds without minutes).
    pub fn notation(&self) -> Option<Notation> {
        match (self.degrees, self.minutes, self.seconds) {
            (Some(_), None, None) => Some(Notation::Degrees),
            (Some(_), Some(_), None) => Some(Notation::DegreesMinutes),
            (Some(_), Some(_), Some(_)) => Some(Notation::DegreesMinutesSeconds),
            _ => None,
        }
    }
}

fn snap(value: f64, precision: f64) -> f64 {
    (value * precision).round() / precision
}

/// Latitude and longitude in the angular form
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularCoordinatePair {
    /// North-south part
    pub latitude: AngularCoordinate,
    /// East-west part
    pub longitude: AngularCoordinate,
}

impl AngularCoordinatePair {
    /// Construct a pair from the given latitude and longitude
    pub const fn new(latitude: AngularCoordinate, longitude: AngularCoordinate) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Neither of the axes is set
    pub fn is_unset(&self) -> bool {
        self.latitude.is_unset() && self.longitude.is_unset()
    }
}
