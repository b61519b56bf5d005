//! Word and character counts for the status bar.

use std::fmt;

/// Counts maximal runs of non-whitespace characters.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts every character, whitespace and newlines included.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Everything the status bar shows.
///
/// `line` is 1-based and `column` 0-based, matching how the caret is
/// reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub line: usize,
    pub column: usize,
    pub words: usize,
    pub chars: usize,
}

impl StatusLine {
    /// Builds the status for `text` with the caret at the 0-based
    /// `(line, column)` the text widget reports.
    pub fn compute(text: &str, caret: (usize, usize)) -> Self {
        Self {
            line: caret.0 + 1,
            column: caret.1,
            words: count_words(text),
            chars: count_chars(text),
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::compute("", (0, 0))
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ln {}, Col {} | Words: {} | Chars: {}",
            self.line, self.column, self.words, self.chars
        )
    }
}
