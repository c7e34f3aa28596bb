//! Owned, shareable token sequences.
//!
//! A [`TokenStream`] is what a compilation unit publishes for a generation:
//! the text it was lexed from plus `(kind, span)` entries. It is immutable
//! once built and is shared between readers through `Arc`.

use std::fmt;
use std::sync::Arc;

use crate::{tokenize, Span, Token, TokenKind};

#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    kind: TokenKind,
    span: Span,
}

/// Immutable token sequence that owns its source text.
///
/// # Invariant
///
/// Entries are contiguous, cover the whole source, and end with exactly one
/// [`TokenKind::EndOfUnit`]; the stream is therefore never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenStream {
    source: Arc<str>,
    entries: Vec<Entry>,
}

impl TokenStream {
    /// Tokenize `source` eagerly into an owned stream.
    pub fn lex(source: Arc<str>) -> Self {
        let entries = tokenize(&source)
            .map(|token| Entry {
                kind: token.kind,
                span: token.span,
            })
            .collect();
        TokenStream { source, entries }
    }

    /// The text this stream was lexed from.
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// Number of tokens, including trivia and the end marker.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: every stream carries at least the end marker.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the token at `index`.
    pub fn get(&self, index: usize) -> Option<Token<'_>> {
        self.entries.get(index).map(|entry| self.view(*entry))
    }

    /// Iterate over every token in order.
    pub fn iter(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.entries.iter().map(|entry| self.view(*entry))
    }

    /// Iterate over non-trivia tokens.
    pub fn significant(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.iter().filter(|token| !token.is_trivia())
    }

    /// Iterate over malformed tokens.
    pub fn malformed(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.iter().filter(|token| token.is_malformed())
    }

    /// Index of the token containing byte `offset`, if any.
    ///
    /// The end marker is returned for `offset == source.len()`.
    pub fn index_at_offset(&self, offset: usize) -> Option<usize> {
        if offset == self.source.len() {
            return Some(self.entries.len() - 1);
        }
        let idx = self.entries.partition_point(|entry| entry.span.end <= offset);
        self.entries
            .get(idx)
            .filter(|entry| entry.span.contains(offset))
            .map(|_| idx)
    }

    fn view(&self, entry: Entry) -> Token<'_> {
        Token {
            kind: entry.kind,
            text: entry.span.slice(&self.source).unwrap_or(""),
            span: entry.span,
        }
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
