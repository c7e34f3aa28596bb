//! Low-level raw scanner for Lift.
//!
//! This crate turns source text into `(RawTag, len)` pairs. It knows nothing
//! about keywords, spans, compilation units, or modules; those live in
//! `lift_lexical`, which "cooks" raw tokens into classified tokens.
//!
//! ```text
//! &str → Cursor → RawScanner → RawToken { tag, len } → (cooking layer)
//! ```
//!
//! Guarantees:
//! - Every raw token except `Eof` has a non-zero length.
//! - The lengths of all tokens before `Eof` sum to the source length.
//! - Errors are encoded as tags, never as `Result::Err`.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use tag::{RawTag, RawToken, MAX_OPERATOR_LEN};
