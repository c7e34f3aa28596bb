//! Byte spans into a unit's text.

use std::fmt;
use std::ops::Range;

/// `start..end` byte offsets, end exclusive.
///
/// Token spans always fall on UTF-8 character boundaries of the text they
/// were lexed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`, as carried by the end marker.
    #[inline]
    pub const fn point(offset: usize) -> Span {
        Span::new(offset, offset)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether byte `offset` lies inside the span. Empty spans contain nothing.
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The covered text, or `None` if the span does not fit `text`.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.to_range())
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.to_range()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
