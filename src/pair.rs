//! Split the whole coordinate into the latitude and the longitude

use coord_parse_types::ParseCoordinateError;

use crate::hemisphere::is_hemisphere_letter;

const PAIR_DELIMITER: char = ',';

/// Latitude and longitude parts of the input, not parsed yet
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct RawPair<'a> {
    pub(crate) latitude: &'a str,
    pub(crate) longitude: &'a str,
}

impl<'a> RawPair<'a> {
    fn new(latitude: &'a str, longitude: &'a str) -> Self {
        let trim_delimiters = |c: char| c == PAIR_DELIMITER || c.is_whitespace();
        Self {
            latitude: latitude.trim_end_matches(trim_delimiters).trim_start(),
            longitude: longitude.trim_start_matches(trim_delimiters).trim_end(),
        }
    }

    fn split_at(s: &'a str, mid: usize) -> Self {
        let (latitude, longitude) = s.split_at(mid);
        Self::new(latitude, longitude)
    }
}

/// The first hemisphere letter either ends the latitude (`40:26:46N,79:56:55W`)
/// or starts the longitude (`40:26:46, W79:56:55`).
/// When the latitude starts with a letter (`N40:26:46 W79:56:55`),
/// the second letter starts the longitude unless it ends the whole string.
/// Without usable letters, the first comma separates the axes.
pub(crate) fn split_pair(s: &str) -> Result<RawPair<'_>, ParseCoordinateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    if let Some(pair) = split_by_hemisphere(s) {
        return Ok(pair);
    }

    s.split_once(PAIR_DELIMITER)
        .map(|(latitude, longitude)| RawPair::new(latitude, longitude))
        .ok_or_else(|| ParseCoordinateError::UnsplittablePair {
            input: s.to_string(),
        })
}

fn is_axis_edge(c: Option<char>) -> bool {
    c.map_or(true, |c| c == PAIR_DELIMITER || c.is_whitespace())
}

fn split_by_hemisphere(s: &str) -> Option<RawPair<'_>> {
    let mut letters = s.char_indices().filter(|&(_, c)| is_hemisphere_letter(c));
    let (first, letter) = letters.next()?;

    let pair = if first == 0 {
        let (second, last_letter) = letters.next()?;
        if second + last_letter.len_utf8() < s.len() {
            RawPair::split_at(s, second)
        } else if s.contains(PAIR_DELIMITER) {
            // `N40:26:46, 79:56:55W`
            return None;
        } else {
            // `N40:26:46 79:56:55W`
            return split_between_numbers(s, second);
        }
    } else {
        let before = &s[..first];
        let after = &s[first + letter.len_utf8()..];
        let starts_axis = before.trim_end().ends_with(PAIR_DELIMITER)
            || (is_axis_edge(before.chars().next_back()) && !is_axis_edge(after.chars().next()));

        if starts_axis {
            RawPair::new(before, &s[first..])
        } else {
            RawPair::new(&s[..first + letter.len_utf8()], after)
        }
    };

    // single trailing letter: `40:26:46, 79:56:55W`
    if pair.latitude.is_empty() || pair.longitude.is_empty() {
        None
    } else {
        Some(pair)
    }
}

/// Split the text before the longitude letter in two halves
/// having the same number of whitespace-separated numbers
fn split_between_numbers(s: &str, end: usize) -> Option<RawPair<'_>> {
    let text = &s[..end];
    let numbers: Vec<_> = chunk_starts(text)
        .filter(|&start| {
            text[start..]
                .split_whitespace()
                .next()
                .map_or(false, |chunk| chunk.contains(|c: char| c.is_ascii_digit()))
        })
        .collect();

    if numbers.len() % 2 == 1 {
        return None;
    }

    numbers
        .get(numbers.len() / 2)
        .map(|&middle| RawPair::split_at(s, middle))
}

/// Byte offsets of the whitespace-separated chunks
fn chunk_starts(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.char_indices()
        .scan(true, |after_space, (i, c)| {
            let starts = *after_space && !c.is_whitespace();
            *after_space = c.is_whitespace();
            Some(starts.then_some(i))
        })
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (&str, &str) {
        let pair = split_pair(s).unwrap();
        (pair.latitude, pair.longitude)
    }

    #[test]
    fn suffix_letters_with_comma() {
        assert_eq!(split("40:26:46N,79:56:55W"), ("40:26:46N", "79:56:55W"));
    }

    #[test]
    fn suffix_letters_with_space() {
        assert_eq!(
            split("40:26:46.302N 79:56:55.903W"),
            ("40:26:46.302N", "79:56:55.903W")
        );
        assert_eq!(split("40°26′47″N 79°58′36″W"), ("40°26′47″N", "79°58′36″W"));
    }

    #[test]
    fn suffix_letters_separated() {
        assert_eq!(
            split("40d 26′ 47″ N 79d 58′ 36″ W"),
            ("40d 26′ 47″ N", "79d 58′ 36″ W")
        );
    }

    #[test]
    fn prefix_letters() {
        assert_eq!(split("N40:26:46, W79:56:55"), ("N40:26:46", "W79:56:55"));
        assert_eq!(split("s 33.45 w 70.66"), ("s 33.45", "w 70.66"));
    }

    #[test]
    fn prefix_latitude_suffix_longitude() {
        assert_eq!(
            split("N40:26:46, 79:56:55W"),
            ("N40:26:46", "79:56:55W")
        );
        assert_eq!(
            split("N40.446111 79.948611W"),
            ("N40.446111", "79.948611W")
        );
        assert_eq!(
            split("N 40° 26′ 46″ 79° 56′ 55″ W"),
            ("N 40° 26′ 46″", "79° 56′ 55″ W")
        );
    }

    #[test]
    #[should_panic(expected = "UnsplittablePair")]
    fn uneven_halves_between_letters() {
        let _p = split_pair("N40:26:46 79 56.9W").unwrap();
    }

    #[test]
    fn prefix_longitude_only() {
        assert_eq!(
            split("40.446111, W79.948611"),
            ("40.446111", "W79.948611")
        );
        assert_eq!(
            split("40.446111, W 79.948611"),
            ("40.446111", "W 79.948611")
        );
        assert_eq!(split("40.446111 W79.948611"), ("40.446111", "W79.948611"));
    }

    #[test]
    fn suffix_latitude_prefix_longitude() {
        assert_eq!(
            split("40.446111N, W79.948611"),
            ("40.446111N", "W79.948611")
        );
        assert_eq!(
            split("40.446111 N, W 79.948611"),
            ("40.446111 N", "W 79.948611")
        );
    }

    #[test]
    fn comma_only() {
        assert_eq!(split("40.446195, -79.948862"), ("40.446195", "-79.948862"));
        assert_eq!(
            split("40° 26.7717, -79° 56.93172"),
            ("40° 26.7717", "-79° 56.93172")
        );
    }

    #[test]
    fn single_trailing_letter_falls_back_to_comma() {
        assert_eq!(split("40:26:46, 79:56:55W"), ("40:26:46", "79:56:55W"));
    }

    #[test]
    fn only_first_comma_splits() {
        assert_eq!(split("40.5, 79.9, 12"), ("40.5", "79.9, 12"));
    }

    #[test]
    fn missing_longitude() {
        // nothing after the letter and no comma to fall back to
        let err = split_pair("91N").unwrap_err();
        assert_eq!(
            err,
            ParseCoordinateError::UnsplittablePair {
                input: "91N".into()
            }
        );
    }

    #[test]
    #[should_panic(expected = "UnsplittablePair")]
    fn no_delimiter() {
        let _p = split_pair("40.446195 -79.948862").unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyString")]
    fn empty() {
        let _p = split_pair("   ").unwrap();
    }
}
