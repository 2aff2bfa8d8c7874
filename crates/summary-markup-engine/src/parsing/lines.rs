use std::borrow::Cow;

/// A reference to a single source line with its zero-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Index of this line in the normalized input.
    pub index: usize,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Normalizes `CRLF` line endings to `LF`.
///
/// Borrows when the input has no carriage-return/line-feed pairs.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Returns an iterator over the lines of already-normalized text.
///
/// Empty lines are kept as position markers. Unlike `str::lines`, a
/// trailing `\n` yields a final empty line, which later phases treat as
/// blank.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}
