//! `lift lex`: dump the token stream of one file.

use std::path::Path;
use std::sync::Arc;

use lift_lexical::{FileSystem, LexicalError, NativeFileSystem, TokenStream};

use super::{fail, CommandError};

/// Lex a file and print every token, trivia included.
pub fn lex_file(path: &str) {
    let text = match NativeFileSystem.read_to_string(Path::new(path)) {
        Ok(text) => text,
        Err(source) => fail(&CommandError::Lexical(LexicalError::IoFailure {
            path: path.into(),
            source,
        })),
    };
    let stream = TokenStream::lex(Arc::from(text));
    print!("{}", render_tokens(path, &stream));
}

/// One line per token: `kind @ span "text"`, then a malformed-token count.
pub fn render_tokens(label: &str, stream: &TokenStream) -> String {
    let mut out = format!("Tokens for '{label}' ({} tokens):\n", stream.len());
    for token in stream.iter() {
        out.push_str(&format!(
            "  {} @ {} {:?}\n",
            token.kind, token.span, token.text
        ));
    }
    let malformed = stream.malformed().count();
    if malformed > 0 {
        out.push_str(&format!("{malformed} malformed token(s)\n"));
    }
    out
}
