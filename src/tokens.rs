//! Split the numeric text of a single axis into degrees, minutes and seconds.
//!
//! All the degree (`°`, `º`, `d`, `:`), minute (`′`, `'`, `’`) and second (`″`, `"`, `”`)
//! symbols, as well as whitespace, are treated as the same separator.
//! The meaning of a number is given by its position only:
//!  - one number is decimal degrees;
//!  - two numbers are degrees and decimal minutes;
//!  - three numbers are degrees, minutes and seconds.

use coord_parse_types::{Direction, Notation, ParseCoordinateError};
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::SplitChar;

lazy_static! {
    static ref SEPARATORS: Regex =
        Regex::new(r#"[°º:dD′'’″"”\s]+"#).expect("Separators regex is valid");
    static ref UNSIGNED_DECIMAL: Regex =
        Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").expect("Number regex is valid");
}

/// The numbers of an axis tagged with their notation
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum AngularTokens {
    Degrees(f64),
    DegreesMinutes(f64, f64),
    DegreesMinutesSeconds(f64, f64, f64),
}

impl AngularTokens {
    /// Split the unsigned text of an axis
    pub(crate) fn tokenize(text: &str) -> Result<Self, ParseCoordinateError> {
        let tokens: Vec<_> = SEPARATORS
            .split(text.trim())
            .filter(|token| !token.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Err(ParseCoordinateError::EmptyString),
            [deg] => Ok(Self::Degrees(parse_token(deg, true)?)),
            [deg, min] => Ok(Self::DegreesMinutes(
                parse_token(deg, false)?,
                parse_token(min, true)?,
            )),
            [deg, min, sec] => Ok(Self::DegreesMinutesSeconds(
                parse_token(deg, false)?,
                parse_token(min, false)?,
                parse_token(sec, true)?,
            )),
            more => Err(ParseCoordinateError::TooManyTokens(more.len())),
        }
    }

    pub(crate) const fn notation(self) -> Notation {
        match self {
            Self::Degrees(_) => Notation::Degrees,
            Self::DegreesMinutes(..) => Notation::DegreesMinutes,
            Self::DegreesMinutesSeconds(..) => Notation::DegreesMinutesSeconds,
        }
    }
}

/// Only the last number can have a fraction part
fn parse_token(token: &str, is_last: bool) -> Result<f64, ParseCoordinateError> {
    if !UNSIGNED_DECIMAL.is_match(token) || (!is_last && token.contains('.')) {
        return Err(ParseCoordinateError::InvalidNumericToken {
            token: token.to_string(),
        });
    }

    Ok(token.parse()?)
}

/// Split the leading `+` or `-` away from the numbers.
///
/// No sign and `+` can only be distinguished by the returned direction.
pub(crate) fn split_sign(text: &str) -> (Option<Direction>, &str) {
    text.split_first_char()
        .and_then(|(first, rest)| Direction::try_from(first).ok().map(|sign| (sign, rest)))
        .map_or((None, text), |(sign, rest)| (Some(sign), rest))
}

#[cfg(test)]
mod tests {
    use coord_parse_types::Direction::{Negative, Positive};

    use super::*;

    #[test]
    fn decimal_degrees() {
        assert_eq!(
            AngularTokens::tokenize("40.446195").unwrap(),
            AngularTokens::Degrees(40.446_195)
        );
    }

    #[test]
    fn degrees_with_sign() {
        assert_eq!(
            AngularTokens::tokenize("28°").unwrap(),
            AngularTokens::Degrees(28.0)
        );
    }

    #[test]
    fn colon_separated() {
        assert_eq!(
            AngularTokens::tokenize("40:26:46.302").unwrap(),
            AngularTokens::DegreesMinutesSeconds(40.0, 26.0, 46.302)
        );
    }

    #[test]
    fn unicode_symbols() {
        assert_eq!(
            AngularTokens::tokenize("40°26′47″").unwrap(),
            AngularTokens::DegreesMinutesSeconds(40.0, 26.0, 47.0)
        );
    }

    #[test]
    fn ascii_symbols_with_spaces() {
        assert_eq!(
            AngularTokens::tokenize("79d 58' 36\"").unwrap(),
            AngularTokens::DegreesMinutesSeconds(79.0, 58.0, 36.0)
        );
        assert_eq!(
            AngularTokens::tokenize("79º58’36”").unwrap(),
            AngularTokens::DegreesMinutesSeconds(79.0, 58.0, 36.0)
        );
    }

    #[test]
    fn decimal_minutes() {
        let tokens = AngularTokens::tokenize("40° 26.7717").unwrap();
        assert_eq!(tokens, AngularTokens::DegreesMinutes(40.0, 26.7717));
        assert_eq!(tokens.notation(), Notation::DegreesMinutes);
    }

    #[test]
    fn doubled_separators_collapse() {
        assert_eq!(
            AngularTokens::tokenize(" 40 °  26 ′′ 46 ″ ").unwrap(),
            AngularTokens::DegreesMinutesSeconds(40.0, 26.0, 46.0)
        );
    }

    #[test]
    fn bare_fraction() {
        assert_eq!(
            AngularTokens::tokenize(".5").unwrap(),
            AngularTokens::Degrees(0.5)
        );
    }

    #[test]
    fn too_many() {
        assert_eq!(
            AngularTokens::tokenize("40:26:46:12").unwrap_err(),
            ParseCoordinateError::TooManyTokens(4)
        );
    }

    #[test]
    fn not_a_number() {
        assert_eq!(
            AngularTokens::tokenize("40:2x:46").unwrap_err(),
            ParseCoordinateError::InvalidNumericToken { token: "2x".into() }
        );
    }

    #[test]
    #[should_panic(expected = "InvalidNumericToken")]
    fn fraction_not_last() {
        let _t = AngularTokens::tokenize("40.5:26").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidNumericToken")]
    fn two_dots() {
        let _t = AngularTokens::tokenize("54.123456.789").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidNumericToken")]
    fn infinity() {
        let _t = AngularTokens::tokenize("inf").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidNumericToken")]
    fn embedded_sign() {
        let _t = AngularTokens::tokenize("40:-26").unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyString")]
    fn only_separators() {
        let _t = AngularTokens::tokenize("° ′ ″").unwrap();
    }

    #[test]
    fn signs() {
        assert_eq!(split_sign("-79.9"), (Some(Negative), "79.9"));
        assert_eq!(split_sign("+79.9"), (Some(Positive), "79.9"));
        assert_eq!(split_sign("79.9"), (None, "79.9"));
        assert_eq!(split_sign(""), (None, ""));
    }
}
