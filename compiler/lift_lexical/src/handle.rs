//! Generation-tagged references into a unit's token stream.
//!
//! A [`ReferenceHandle`] captures `(unit, generation, index)`. It never owns
//! the unit and carries no notification machinery: validity is a comparison
//! of the captured generation against the unit's current one, performed on
//! every dereference.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::{CompilationUnit, Generation, LexicalError, Span, Token, TokenKind, TokenStream};

/// Capability-checked pointer to one token of a compilation unit.
#[derive(Clone)]
pub struct ReferenceHandle {
    unit: Weak<CompilationUnit>,
    generation: Generation,
    index: usize,
}

impl ReferenceHandle {
    pub(crate) fn new(unit: Weak<CompilationUnit>, generation: Generation, index: usize) -> Self {
        ReferenceHandle {
            unit,
            generation,
            index,
        }
    }

    /// Dereference the handle.
    ///
    /// # Errors
    ///
    /// [`LexicalError::Invalidated`] when the unit was dropped or retired, or
    /// its generation moved past the captured one. Consumers are expected to
    /// handle this as a normal outcome and take a fresh handle.
    pub fn resolve(&self) -> Result<TokenRef, LexicalError> {
        let Some(unit) = self.unit.upgrade() else {
            return Err(LexicalError::Invalidated {
                captured: self.generation,
                current: None,
            });
        };
        unit.resolve(self.generation, self.index)
    }

    pub fn is_valid(&self) -> bool {
        self.unit
            .upgrade()
            .is_some_and(|unit| unit.is_current(self.generation))
    }

    /// Generation the handle was taken at.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The referenced unit, if it is still alive.
    pub fn unit(&self) -> Option<Arc<CompilationUnit>> {
        self.unit.upgrade()
    }
}

impl fmt::Debug for ReferenceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceHandle")
            .field("generation", &self.generation)
            .field("index", &self.index)
            .field("alive", &(self.unit.strong_count() > 0))
            .finish()
    }
}

/// A resolved token, keeping its stream alive.
#[derive(Clone)]
pub struct TokenRef {
    stream: Arc<TokenStream>,
    generation: Generation,
    index: usize,
}

impl TokenRef {
    /// `index` must be in range for `stream`.
    pub(crate) fn new(stream: Arc<TokenStream>, generation: Generation, index: usize) -> Self {
        debug_assert!(index < stream.len());
        TokenRef {
            stream,
            generation,
            index,
        }
    }

    pub fn token(&self) -> Token<'_> {
        // In range by construction; the fallback is an empty end marker.
        self.stream.get(self.index).unwrap_or(Token {
            kind: TokenKind::EndOfUnit,
            text: "",
            span: Span::point(self.stream.source().len()),
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The whole stream the token belongs to.
    pub fn stream(&self) -> &Arc<TokenStream> {
        &self.stream
    }
}

impl fmt::Debug for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRef")
            .field("generation", &self.generation)
            .field("index", &self.index)
            .field("token", &self.token())
            .finish()
    }
}
