//! Fold the angular parts and the sign into signed decimal degrees

use coord_parse_types::{AngularCoordinate, Axis, Direction, OutOfRange, ParseCoordinateError};

use crate::tokens::AngularTokens;

const MINUTES_IN_DEGREE: f64 = 60.0;
const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

impl AngularTokens {
    /// Unsigned decimal degrees
    pub(crate) fn magnitude(self) -> f64 {
        match self {
            Self::Degrees(deg) => deg,
            Self::DegreesMinutes(deg, min) => deg + min / MINUTES_IN_DEGREE,
            Self::DegreesMinutesSeconds(deg, min, sec) => {
                deg + min / MINUTES_IN_DEGREE + sec / SECONDS_IN_DEGREE
            }
        }
    }

    fn check_parts(self) -> Result<(), OutOfRange> {
        let (deg, min, sec) = match self {
            Self::Degrees(deg) => (deg, None, None),
            Self::DegreesMinutes(deg, min) => (deg, Some(min), None),
            Self::DegreesMinutesSeconds(deg, min, sec) => (deg, Some(min), Some(sec)),
        };

        if !deg.is_finite() || deg < 0.0 {
            return Err(OutOfRange::Degrees);
        }

        let valid_part = 0.0..SECONDS_IN_MINUTE;
        if min.map_or(false, |min| !valid_part.contains(&min)) {
            return Err(OutOfRange::ArcMinutes);
        }

        if sec.map_or(false, |sec| !valid_part.contains(&sec)) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(())
    }

    /// The signed decimal degrees.
    ///
    /// Without a known axis, the value is bounded by the wider (longitude) range.
    pub(crate) fn to_decimal(
        self,
        direction: Option<Direction>,
        axis: Option<Axis>,
    ) -> Result<f64, OutOfRange> {
        self.check_parts()?;

        let axis = axis.unwrap_or(Axis::Longitude);
        let magnitude = self.magnitude();
        if magnitude > axis.max_degrees() {
            return Err(axis.overflow());
        }

        Ok(direction.map_or(magnitude, |direction| direction.signum() * magnitude))
    }

    pub(crate) fn to_angular(self, direction: Option<Direction>) -> AngularCoordinate {
        match self {
            Self::Degrees(deg) => AngularCoordinate::with_degrees(deg, direction),
            Self::DegreesMinutes(deg, min) => AngularCoordinate::with_dm(deg, min, direction),
            Self::DegreesMinutesSeconds(deg, min, sec) => {
                AngularCoordinate::with_dms(deg, min, sec, direction)
            }
        }
    }
}

impl TryFrom<AngularCoordinate> for AngularTokens {
    type Error = ParseCoordinateError;

    fn try_from(coord: AngularCoordinate) -> Result<Self, Self::Error> {
        match (coord.degrees, coord.minutes, coord.seconds) {
            (None, ..) => Err(ParseCoordinateError::Unset),
            (Some(deg), None, None) => Ok(Self::Degrees(deg)),
            (Some(_), None, Some(_)) => Err(ParseCoordinateError::MissingMinutes),
            (Some(deg), Some(min), None) => Ok(Self::DegreesMinutes(deg, min)),
            (Some(deg), Some(min), Some(sec)) => Ok(Self::DegreesMinutesSeconds(deg, min, sec)),
        }
    }
}

/// Signed decimal degrees of the angular coordinate on the given axis
pub(crate) fn angular_to_decimal(
    coord: AngularCoordinate,
    axis: Option<Axis>,
) -> Result<f64, ParseCoordinateError> {
    let tokens = AngularTokens::try_from(coord)?;
    Ok(tokens.to_decimal(coord.direction, axis)?)
}
