//! Byte cursor over a source string.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, so lookahead never needs an explicit bounds check at the
//! call site. A NUL byte inside the source also reads as `0x00`; use
//! [`Cursor::is_eof`] to tell the two apart.

/// Smaller of two search hits; `memchr3` takes at most three needles.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over the bytes of a source string.
///
/// Copying a cursor saves its position.
///
/// # Invariant
///
/// Every position the scanner stops at is a UTF-8 character boundary of
/// `source`, so [`Cursor::slice`] never splits a character.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at offset 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte under the cursor; `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Character starting at the cursor, if the cursor is on a boundary.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Step over the whole character under the cursor.
    ///
    /// At EOF this still moves one byte; callers check [`is_eof`](Self::is_eof)
    /// first.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(width);
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The bytes from the current position to the end of the source.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.source.as_bytes().get(self.pos..).unwrap_or(&[])
    }

    /// Text of `start..end`.
    ///
    /// Returns an empty string if `start..end` is out of range or not on
    /// character boundaries; the scanner never produces such ranges.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    /// Text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Consume bytes matching `pred`.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Stop on the next `\n` or `\r`, or at the end. Line comments end here.
    pub fn eat_until_line_break_or_eof(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Jump to the next byte a string literal must inspect (`"`, `\`, `\n`
    /// or `\r`) and return it; `0` when the text runs out first.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let rest = self.rest();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let cr = memchr::memchr(b'\r', rest);

        match earliest_of(primary, cr) {
            Some(offset) => {
                self.pos += offset;
                self.current()
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }

    /// Advance to just past the next `*/`, or to EOF.
    ///
    /// Returns `true` if the terminator was found.
    pub fn eat_through_block_comment_end(&mut self) -> bool {
        match memchr::memmem::find(self.rest(), b"*/") {
            Some(offset) => {
                self.pos += offset + 2;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }
}
