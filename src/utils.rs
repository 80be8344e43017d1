//! Utilities functions which do not linked to domain

/// Split the given character from the beginning or the end without allocation
pub(crate) trait SplitChar {
    /// Split into the first character and the rest of the string
    fn split_first_char(&self) -> Option<(char, &str)>;
    /// Split into the last character and the rest of the string
    fn split_last_char(&self) -> Option<(&str, char)>;
}

impl SplitChar for str {
    fn split_first_char(&self) -> Option<(char, &str)> {
        let mut chars = self.chars();
        chars.next().map(|head| (head, chars.as_str()))
    }

    fn split_last_char(&self) -> Option<(&str, char)> {
        let mut chars = self.chars();
        chars.next_back().map(|tail| (chars.as_str(), tail))
    }
}
