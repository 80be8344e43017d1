//! Detect the hemisphere letter of a single axis

use coord_parse_types::{Hemisphere, ParseCoordinateError};

use crate::utils::SplitChar;

pub(crate) fn is_hemisphere_letter(c: char) -> bool {
    Hemisphere::try_from(c).is_ok()
}

/// Strip the hemisphere letter from the start or the end of the axis.
///
/// A sign is not a hemisphere, so it stays in the returned text.
pub(crate) fn extract_hemisphere(
    axis: &str,
) -> Result<(Option<Hemisphere>, &str), ParseCoordinateError> {
    let axis = axis.trim();

    let (hemisphere, rest) = if let Some((rest, hemisphere)) = axis
        .split_last_char()
        .and_then(|(rest, last)| Hemisphere::try_from(last).ok().map(|h| (rest, h)))
    {
        (Some(hemisphere), rest)
    } else if let Some((hemisphere, rest)) = axis
        .split_first_char()
        .and_then(|(first, rest)| Hemisphere::try_from(first).ok().map(|h| (h, rest)))
    {
        (Some(hemisphere), rest)
    } else {
        (None, axis)
    };

    // any letter left is not on the edge
    if rest.chars().any(is_hemisphere_letter) {
        return Err(ParseCoordinateError::MalformedAxis {
            axis: axis.to_string(),
        });
    }

    Ok((hemisphere, rest.trim()))
}
