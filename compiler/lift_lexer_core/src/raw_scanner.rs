//! Byte-dispatch scanner for Lift source text.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! with zero heap allocation. It does not resolve keywords or compute spans;
//! those are deferred to the cooking layer.
//!
//! # Design
//!
//! `next_token` matches on the first byte of the lexeme and hands off to a
//! helper that consumes the rest and reports `RawToken { tag, len }`. Operators
//! are resolved against the fixed table in [`RawTag::OPERATORS`], trying the
//! longest spelling first.
//!
//! # Recovery
//!
//! Malformed lexemes become error tags covering exactly the bytes that were
//! consumed, and scanning resumes right after them:
//! - unterminated strings stop before the line break (or at EOF)
//! - unterminated block comments run to EOF
//! - unexpected characters are consumed one UTF-8 character at a time

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken, MAX_OPERATOR_LEN};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time. Cloning a scanner snapshots its position,
/// and a fresh scanner over the same source always yields the same tokens.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Create a scanner from an existing cursor.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Scan one lexeme.
    ///
    /// Once the text is used up this keeps answering `Eof` with `len == 0`.
    pub fn next_token(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let start = self.cursor.pos();
        match self.cursor.current() {
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'+' | b'-' | b'*' | b'%' | b'^' | b'&' | b'|' | b'~' | b'!' | b'=' | b'<' | b'>'
            | b'.' | b'?' | b':' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b';'
            | b'@' | b'#' => self.operator(start),
            0x80..=0xFF => self.non_ascii(start),
            // NUL, other control characters, DEL, and unused ASCII punctuation
            _ => self.invalid_char(start),
        }
    }

    #[inline]
    fn finish(&self, start: usize, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Whitespace & Newlines ──────────────────────────────────

    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(is_horizontal_whitespace);
        self.finish(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF: one Newline token with len=2
            self.cursor.advance();
            self.finish(start, RawTag::Newline)
        } else {
            // Lone \r: horizontal whitespace
            self.finish(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: usize) -> RawToken {
        self.cursor.advance();
        self.finish(start, RawTag::Newline)
    }

    // ─── Comments ───────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: usize) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_line_break_or_eof();
                self.finish(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.eat_through_block_comment_end() {
                    self.finish(start, RawTag::BlockComment)
                } else {
                    self.finish(start, RawTag::UnterminatedBlockComment)
                }
            }
            _ => self.operator(start),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> RawToken {
        self.cursor.advance_char(); // consume first char (already validated)
        self.eat_ident_continue();
        self.finish(start, RawTag::Ident)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_some_and(char::is_alphanumeric)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    fn non_ascii(&mut self, start: usize) -> RawToken {
        if self.cursor.current_char().is_some_and(char::is_alphabetic) {
            self.identifier(start)
        } else {
            self.invalid_char(start)
        }
    }

    fn invalid_char(&mut self, start: usize) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::InvalidChar)
    }

    // ─── Operators ──────────────────────────────────────────────

    /// Longest-match lookup against the operator table.
    fn operator(&mut self, start: usize) -> RawToken {
        let rest = self.cursor.rest();
        let longest = MAX_OPERATOR_LEN.min(rest.len());
        for len in (1..=longest).rev() {
            if let Some(tag) = RawTag::from_operator(&rest[..len]) {
                self.cursor.advance_n(len);
                return self.finish(start, tag);
            }
        }
        // Unreachable for bytes routed here by `next_token`, but stay total.
        self.invalid_char(start)
    }

    // ─── Numbers ────────────────────────────────────────────────

    fn number(&mut self, start: usize) -> RawToken {
        if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => return self.radix_int(start, is_hex_digit, RawTag::HexInt),
                b'o' | b'O' => return self.radix_int(start, is_oct_digit, RawTag::OctInt),
                b'b' | b'B' => return self.radix_int(start, is_bin_digit, RawTag::BinInt),
                _ => {}
            }
        }

        self.cursor.eat_while(is_dec_digit_or_underscore);
        let mut tag = RawTag::Int;

        // Fraction: only when a digit follows the dot, so `1..5` stays a range.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(is_dec_digit_or_underscore);
            tag = RawTag::Float;
        }

        // Exponent: only when digits follow, otherwise `e` starts an identifier.
        if matches!(self.cursor.current(), b'e' | b'E') {
            let sign = matches!(self.cursor.peek(), b'+' | b'-');
            let digit = if sign {
                self.cursor.peek2()
            } else {
                self.cursor.peek()
            };
            if digit.is_ascii_digit() {
                self.cursor.advance_n(if sign { 2 } else { 1 });
                self.cursor.eat_while(is_dec_digit_or_underscore);
                tag = RawTag::Float;
            }
        }

        self.finish(start, tag)
    }

    fn radix_int(&mut self, start: usize, is_digit: fn(u8) -> bool, tag: RawTag) -> RawToken {
        self.cursor.advance_n(2); // consume `0x` / `0o` / `0b`
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(|b| is_digit(b) || b == b'_');
        let has_digit = self
            .cursor
            .slice_from(digits_start)
            .bytes()
            .any(is_digit);
        if has_digit {
            self.finish(start, tag)
        } else {
            self.finish(start, RawTag::MissingRadixDigits)
        }
    }

    // ─── Strings ────────────────────────────────────────────────

    fn string(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.finish(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if self.cursor.is_eof() || matches!(self.cursor.current(), b'\n' | b'\r') {
                        return self.finish(start, RawTag::UnterminatedString);
                    }
                    self.cursor.advance_char(); // escaped character
                }
                // Line break or EOF: stop before it so the newline stays trivia.
                _ => return self.finish(start, RawTag::UnterminatedString),
            }
        }
    }
}

#[inline]
fn is_horizontal_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

#[inline]
fn is_dec_digit_or_underscore(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}

#[inline]
fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
fn is_oct_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_bin_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}
