/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Delimiters are all ASCII, so any position the parser stops at to slice
/// is a char boundary even when the line holds multi-byte text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `stop` or EOF, returning how many bytes were skipped.
    pub fn skip_until(&mut self, stop: u8) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if b == stop {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Returns the text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
