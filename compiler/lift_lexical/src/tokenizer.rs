//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into classified
//! [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → cook → Token { kind, text, span }
//! ```
//!
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, otherwise `Identifier`
//! - **Literals**: classified only; values are not parsed here
//! - **Errors**: `Malformed` tokens, never an early exit

use std::iter::FusedIterator;

use lift_lexer_core::{RawScanner, RawTag};

use crate::keywords;
use crate::{LiteralKind, MalformedKind, Operator, Radix, Span, Token, TokenKind, TriviaKind};

/// Tokenize `text` lazily.
///
/// The sequence is total (every byte of `text` belongs to exactly one token)
/// and always ends with a single [`TokenKind::EndOfUnit`] token. Calling this
/// again on the same text yields an identical sequence.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer {
        source: text,
        scanner: RawScanner::new(text),
        finished: false,
    }
}

/// Lazy token iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    scanner: RawScanner<'a>,
    finished: bool,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        let span = Span::new(start, start + raw.len);
        let text = span.slice(self.source).unwrap_or("");
        if raw.tag == RawTag::Eof {
            self.finished = true;
        }
        Some(Token {
            kind: cook(raw.tag, text),
            text,
            span,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            // At least the end marker; at most one token per remaining byte plus it.
            let remaining = self.source.len() - self.scanner.pos();
            (1, Some(remaining + 1))
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Cook a single raw token into a `TokenKind`.
pub(crate) fn cook(tag: RawTag, text: &str) -> TokenKind {
    match tag {
        RawTag::Ident => keywords::lookup(text).map_or(TokenKind::Identifier, TokenKind::Keyword),

        RawTag::Int => TokenKind::Literal(LiteralKind::Integer(Radix::Decimal)),
        RawTag::HexInt => TokenKind::Literal(LiteralKind::Integer(Radix::Hexadecimal)),
        RawTag::OctInt => TokenKind::Literal(LiteralKind::Integer(Radix::Octal)),
        RawTag::BinInt => TokenKind::Literal(LiteralKind::Integer(Radix::Binary)),
        RawTag::Float => TokenKind::Literal(LiteralKind::Float),
        RawTag::String => TokenKind::Literal(LiteralKind::String),

        RawTag::Whitespace => TokenKind::Trivia(TriviaKind::Whitespace),
        RawTag::Newline => TokenKind::Trivia(TriviaKind::Newline),
        RawTag::LineComment => TokenKind::Trivia(TriviaKind::LineComment),
        RawTag::BlockComment => TokenKind::Trivia(TriviaKind::BlockComment),

        RawTag::InvalidChar => TokenKind::Malformed(MalformedKind::UnexpectedCharacter),
        RawTag::UnterminatedString => TokenKind::Malformed(MalformedKind::UnterminatedString),
        RawTag::UnterminatedBlockComment => {
            TokenKind::Malformed(MalformedKind::UnterminatedBlockComment)
        }
        RawTag::MissingRadixDigits => TokenKind::Malformed(MalformedKind::MissingRadixDigits),

        RawTag::Eof => TokenKind::EndOfUnit,

        op => cook_operator(op).map_or(
            TokenKind::Malformed(MalformedKind::UnexpectedCharacter),
            TokenKind::Operator,
        ),
    }
}

fn cook_operator(tag: RawTag) -> Option<Operator> {
    let op = match tag {
        RawTag::Plus => Operator::Plus,
        RawTag::Minus => Operator::Minus,
        RawTag::Star => Operator::Star,
        RawTag::Slash => Operator::Slash,
        RawTag::Percent => Operator::Percent,
        RawTag::Caret => Operator::Caret,
        RawTag::Ampersand => Operator::Amp,
        RawTag::Pipe => Operator::Pipe,
        RawTag::Tilde => Operator::Tilde,
        RawTag::Bang => Operator::Bang,
        RawTag::Equal => Operator::Eq,
        RawTag::Less => Operator::Lt,
        RawTag::Greater => Operator::Gt,
        RawTag::Dot => Operator::Dot,
        RawTag::Question => Operator::Question,
        RawTag::Colon => Operator::Colon,

        RawTag::EqualEqual => Operator::EqEq,
        RawTag::BangEqual => Operator::NotEq,
        RawTag::LessEqual => Operator::LtEq,
        RawTag::GreaterEqual => Operator::GtEq,
        RawTag::Shl => Operator::Shl,
        RawTag::Shr => Operator::Shr,
        RawTag::AmpersandAmpersand => Operator::AmpAmp,
        RawTag::PipePipe => Operator::PipePipe,
        RawTag::Arrow => Operator::Arrow,
        RawTag::FatArrow => Operator::FatArrow,
        RawTag::DotDot => Operator::DotDot,
        RawTag::DotDotLess => Operator::DotDotLt,
        RawTag::DotDotDot => Operator::DotDotDot,
        RawTag::ColonColon => Operator::DoubleColon,
        RawTag::QuestionQuestion => Operator::DoubleQuestion,
        RawTag::PlusEqual => Operator::PlusEq,
        RawTag::MinusEqual => Operator::MinusEq,
        RawTag::StarEqual => Operator::StarEq,
        RawTag::SlashEqual => Operator::SlashEq,
        RawTag::PercentEqual => Operator::PercentEq,

        RawTag::LeftParen => Operator::LParen,
        RawTag::RightParen => Operator::RParen,
        RawTag::LeftBracket => Operator::LBracket,
        RawTag::RightBracket => Operator::RBracket,
        RawTag::LeftBrace => Operator::LBrace,
        RawTag::RightBrace => Operator::RBrace,
        RawTag::Comma => Operator::Comma,
        RawTag::Semicolon => Operator::Semicolon,
        RawTag::At => Operator::At,
        RawTag::Hash => Operator::Hash,

        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
mod tests;
