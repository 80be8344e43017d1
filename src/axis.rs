//! A single latitude or longitude parsed from its text

use coord_parse_types::{
    AngularCoordinate, Axis, Direction, Hemisphere, Notation, ParseCoordinateError,
};

use crate::{
    hemisphere::extract_hemisphere,
    tokens::{split_sign, AngularTokens},
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ParsedAxis {
    hemisphere: Option<Hemisphere>,
    sign: Option<Direction>,
    axis: Option<Axis>,
    tokens: AngularTokens,
}

impl ParsedAxis {
    pub(crate) fn parse(s: &str) -> Result<Self, ParseCoordinateError> {
        let (hemisphere, rest) = extract_hemisphere(s)?;
        if rest.is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let (sign, numbers) = split_sign(rest);
        let tokens = AngularTokens::tokenize(numbers)?;

        Ok(Self {
            hemisphere,
            sign,
            axis: hemisphere.map(Hemisphere::axis),
            tokens,
        })
    }

    /// Parse the text known to be the given axis of a pair
    pub(crate) fn parse_on(s: &str, axis: Axis) -> Result<Self, ParseCoordinateError> {
        let parsed = Self::parse(s)?;
        match parsed.hemisphere {
            Some(found) if found.axis() != axis => Err(ParseCoordinateError::AxisMismatch {
                expected: axis,
                found,
            }),
            _ => Ok(Self {
                axis: Some(axis),
                ..parsed
            }),
        }
    }

    pub(crate) fn expect_notation(self, accepted: &[Notation]) -> Result<Self, ParseCoordinateError> {
        let found = self.tokens.notation();
        if accepted.contains(&found) {
            Ok(self)
        } else {
            Err(ParseCoordinateError::Notation { found })
        }
    }

    /// The hemisphere letter wins over the sign: `-79.9E` is eastern
    pub(crate) fn direction(&self) -> Option<Direction> {
        self.hemisphere.map(Hemisphere::direction).or(self.sign)
    }

    pub(crate) fn to_decimal(&self) -> Result<f64, ParseCoordinateError> {
        Ok(self.tokens.to_decimal(self.direction(), self.axis)?)
    }

    /// The angular form of an axis having a valid decimal value
    pub(crate) fn to_angular(&self) -> Result<AngularCoordinate, ParseCoordinateError> {
        let _value = self.to_decimal()?;
        Ok(self.tokens.to_angular(self.direction()))
    }
}
