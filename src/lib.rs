//! Convert human-written geographic coordinates into decimal degrees.
//!
//! All of the following notations are accepted for a pair of coordinates:
//!
//! ```text
//! 40:26:46N,79:56:55W
//! 40:26:46.302N 79:56:55.903W
//! 40°26′47″N 79°58′36″W
//! 40d 26′ 47″ N 79d 58′ 36″ W
//! 40.446195N 79.948862W
//! 40.446195, -79.948862
//! 40° 26.7717, -79° 56.93172
//! ```
//!
//! The hemisphere letter (`N`, `S`, `E`, `W`) is either the first or the last character
//! of an axis. Without the letter, a leading `-` makes the coordinate southern or western.
//! When both are present, the letter decides.
//!
//! Only the last of degrees, minutes or seconds may have a decimal fraction.
//!
//! ```
//! let (lat, lon) = coord_parse::coordinates_for_string("40:26:46N,79:56:55W").unwrap();
//! assert!((lat - 40.446_111).abs() < 1e-6);
//! assert!((lon + 79.948_611).abs() < 1e-6);
//!
//! assert!(coord_parse::is_valid_coordinate("40.446195N 79.948862W"));
//! assert!(!coord_parse::is_valid_coordinate("91N"));
//! ```

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use coord_parse_types::{
    AngularCoordinate, AngularCoordinatePair, Axis, Direction, Hemisphere, Notation, OutOfRange,
    ParseCoordinateError, ParseDirectionError, ParseHemisphereError,
};

use self::{axis::ParsedAxis, pair::split_pair};

mod axis;
mod convert;
mod hemisphere;
mod pair;
mod tokens;
mod utils;

/// Can the string be converted into a pair of coordinates?
///
/// The only place where the parsing error is swallowed.
pub fn is_valid_coordinate(s: &str) -> bool {
    coordinates_for_string(s).is_ok()
}

/// Decimal degrees of a single axis written in any of the supported notations.
///
/// ```
/// # use coord_parse::coordinate_for_string;
/// let lat = coordinate_for_string("40:26:46S").unwrap();
/// assert!((lat + 40.446_111).abs() < 1e-6);
///
/// let lat = coordinate_for_string("40° 26.7717").unwrap();
/// assert!((lat - 40.446_195).abs() < 1e-6);
/// ```
///
/// # Errors
/// The first problem found with the letter, the numbers or their range.
pub fn coordinate_for_string(s: &str) -> Result<f64, ParseCoordinateError> {
    ParsedAxis::parse(s)?.to_decimal()
}

/// Decimal latitude and longitude of the pair
///
/// # Errors
/// The string cannot be split into two axes, or any of the axes is invalid.
pub fn coordinates_for_string(s: &str) -> Result<(f64, f64), ParseCoordinateError> {
    let pair = split_pair(s)?;
    let latitude = ParsedAxis::parse_on(pair.latitude, Axis::Latitude)?.to_decimal()?;
    let longitude = ParsedAxis::parse_on(pair.longitude, Axis::Longitude)?.to_decimal()?;
    Ok((latitude, longitude))
}

/// The angular form of a latitude and longitude pair.
///
/// ```
/// # use coord_parse::{angular_coordinates_for_string, Direction};
/// let pair = angular_coordinates_for_string("40° 26.7717, -79° 56.93172").unwrap();
/// assert_eq!(pair.latitude.degrees, Some(40.0));
/// assert_eq!(pair.latitude.minutes, Some(26.7717));
/// assert_eq!(pair.latitude.seconds, None);
/// assert_eq!(pair.latitude.direction, None);
/// assert_eq!(pair.longitude.direction, Some(Direction::Negative));
/// ```
///
/// # Errors
/// The string cannot be split into two axes, or any of the axes is invalid.
pub fn angular_coordinates_for_string(
    s: &str,
) -> Result<AngularCoordinatePair, ParseCoordinateError> {
    let pair = split_pair(s)?;
    let latitude = ParsedAxis::parse_on(pair.latitude, Axis::Latitude)?.to_angular()?;
    let longitude = ParsedAxis::parse_on(pair.longitude, Axis::Longitude)?.to_angular()?;
    Ok(AngularCoordinatePair::new(latitude, longitude))
}

/// The angular form of a single axis
///
/// # Errors
/// The first problem found with the letter, the numbers or their range.
pub fn angular_coordinate_for_string(s: &str) -> Result<AngularCoordinate, ParseCoordinateError> {
    ParsedAxis::parse(s)?.to_angular()
}

/// Decimal degrees of a single axis written as decimal degrees
/// or as degrees, minutes and seconds.
///
/// # Errors
/// Same as [`coordinate_for_string`], and
/// [`ParseCoordinateError::Notation`] for the degrees and decimal minutes.
pub fn decimal_coordinate_for_string(s: &str) -> Result<f64, ParseCoordinateError> {
    ParsedAxis::parse(s)?
        .expect_notation(&[Notation::Degrees, Notation::DegreesMinutesSeconds])?
        .to_decimal()
}

/// Decimal degrees of a single axis written as degrees and decimal minutes.
///
/// ```
/// # use coord_parse::decimal_coordinate_for_min_decimal_string;
/// let lon = decimal_coordinate_for_min_decimal_string("-79° 56.93172").unwrap();
/// assert!((lon + 79.948_862).abs() < 1e-6);
///
/// assert!(decimal_coordinate_for_min_decimal_string("79:56:55W").is_err());
/// ```
///
/// # Errors
/// Same as [`coordinate_for_string`], and
/// [`ParseCoordinateError::Notation`] for any other notation.
pub fn decimal_coordinate_for_min_decimal_string(s: &str) -> Result<f64, ParseCoordinateError> {
    ParsedAxis::parse(s)?
        .expect_notation(&[Notation::DegreesMinutes])?
        .to_decimal()
}

/// Signed decimal degrees of the angular coordinate.
/// The axis is unknown, so the value should not exceed 180 degrees.
///
/// # Errors
/// - [`ParseCoordinateError::Unset`] for a coordinate without degrees;
/// - [`ParseCoordinateError::MissingMinutes`] for the seconds without minutes;
/// - [`ParseCoordinateError::Range`] for the parts out of their bounds.
pub fn decimal_coordinate_for_angular(
    coord: AngularCoordinate,
) -> Result<f64, ParseCoordinateError> {
    convert::angular_to_decimal(coord, None)
}

/// Decimal latitude and longitude of the angular pair
///
/// # Errors
/// Any of [`decimal_coordinate_for_angular`] errors for either axis,
/// with the latitude bounded by 90 degrees.
pub fn coordinates_for_angular_coordinates(
    pair: AngularCoordinatePair,
) -> Result<(f64, f64), ParseCoordinateError> {
    let latitude = convert::angular_to_decimal(pair.latitude, Some(Axis::Latitude))?;
    let longitude = convert::angular_to_decimal(pair.longitude, Some(Axis::Longitude))?;
    Ok((latitude, longitude))
}
