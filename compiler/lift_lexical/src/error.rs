//! Errors reported by compilation units, handles and modules.
//!
//! Malformed source text is not an error at this layer: the tokenizer
//! reports it as `TokenKind::Malformed` tokens instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Generation;

/// Failure of a lexical-layer operation.
///
/// Returned to the immediate caller; nothing here retries.
#[derive(Debug, Error)]
pub enum LexicalError {
    /// A load was attempted on a unit with nothing to load from: no unit
    /// location, no owning module, or a module without a location.
    #[error("compilation unit has no persistent representation to load")]
    NoRepresentationSource,

    /// Reading a file or enumerating a directory failed.
    #[error("cannot read `{}`: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A reference handle outlived the generation it was taken at.
    #[error("{}", invalidated_message(*captured, *current))]
    Invalidated {
        captured: Generation,
        /// `None` when the unit no longer exists or was removed from its module.
        current: Option<Generation>,
    },

    #[error("compilation unit location `{}` must be relative", .0.display())]
    AbsoluteUnitLocation(PathBuf),

    #[error("lexical module location `{}` must be absolute", .0.display())]
    RelativeModuleLocation(PathBuf),
}

impl LexicalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexicalError::IoFailure {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the consumer-side `Invalidated` condition.
    pub fn is_invalidated(&self) -> bool {
        matches!(self, LexicalError::Invalidated { .. })
    }
}

fn invalidated_message(captured: Generation, current: Option<Generation>) -> String {
    match current {
        Some(current) => format!(
            "reference taken at generation {captured} is stale (unit is at generation {current})"
        ),
        None => format!(
            "reference taken at generation {captured} is stale (unit was removed)"
        ),
    }
}
