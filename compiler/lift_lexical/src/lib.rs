//! Lexical layer of the Lift compiler.
//!
//! Turns source text into classified tokens and manages the units of text
//! being compiled:
//!
//! - [`tokenize`]: context-free tokenizer; total, restartable, and never
//!   fails (malformed lexemes become `Malformed` tokens).
//! - [`CompilationUnit`]: mutable container of one token stream, optionally
//!   bound to a file, with a generation counter.
//! - [`ReferenceHandle`]: `(unit, generation, index)` pointer that detects a
//!   replaced stream on every dereference.
//! - [`LexicalModule`]: ordered units, optionally backed by a directory read
//!   through a [`FileSystem`].
//!
//! ```text
//! LexicalModule ──enumerate──▶ CompilationUnit (unloaded)
//!                                   │ load / replace
//!                                   ▼
//!                  tokenize ──▶ TokenStream @ generation g ◀── ReferenceHandle
//! ```

mod config;
mod error;
mod fs;
mod handle;
mod keywords;
mod manifest;
mod module;
mod span;
mod stream;
mod token;
mod tokenizer;
mod unit;

pub use config::ModuleConfig;
pub use error::LexicalError;
pub use fs::{DirEntry, FileSystem, MemoryFileSystem, NativeFileSystem};
pub use handle::{ReferenceHandle, TokenRef};
pub use manifest::{ModuleManifest, UnitManifest};
pub use module::LexicalModule;
pub use span::Span;
pub use stream::TokenStream;
pub use token::{
    Keyword, LiteralKind, MalformedKind, Operator, Radix, Token, TokenKind, TriviaKind,
};
pub use tokenizer::{tokenize, Tokenizer};
pub use unit::{CompilationUnit, Generation, UnitStatus};
