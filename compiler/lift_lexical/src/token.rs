//! Classified lexical tokens.
//!
//! A [`Token`] is an immutable view: its kind, the text it was sliced from,
//! and its span. Tokens borrow the text they came from; a [`TokenStream`]
//! keeps that text alive for tokens stored in a compilation unit.
//!
//! [`TokenStream`]: crate::TokenStream

use std::fmt;

use crate::Span;

/// A classified lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl Token<'_> {
    /// Whitespace or comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Trivia(_))
    }

    /// A lexeme that did not match any rule to completion.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, TokenKind::Malformed(_))
    }

    /// The terminating token of every sequence.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfUnit
    }
}

/// Token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Operator(Operator),
    Identifier,
    Literal(LiteralKind),
    Trivia(TriviaKind),
    /// Diagnostic token: the stream stays total instead of aborting.
    Malformed(MalformedKind),
    EndOfUnit,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            TokenKind::Operator(op) => write!(f, "operator `{}`", op.as_str()),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Literal(lit) => write!(f, "{} literal", lit.name()),
            TokenKind::Trivia(trivia) => f.write_str(trivia.name()),
            TokenKind::Malformed(kind) => write!(f, "malformed: {}", kind.message()),
            TokenKind::EndOfUnit => f.write_str("end of unit"),
        }
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    As,
    Break,
    Case,
    Continue,
    Default,
    Defer,
    Do,
    Else,
    Enum,
    Extension,
    False,
    For,
    Func,
    Guard,
    If,
    Import,
    In,
    Init,
    Internal,
    Is,
    Let,
    Nil,
    Private,
    Protocol,
    Public,
    Repeat,
    Return,
    SelfLower,
    SelfUpper,
    Struct,
    Switch,
    Throw,
    Throws,
    True,
    Try,
    Type,
    Var,
    Where,
    While,
}

impl Keyword {
    pub const ALL: &'static [Keyword] = &[
        Keyword::As,
        Keyword::Break,
        Keyword::Case,
        Keyword::Continue,
        Keyword::Default,
        Keyword::Defer,
        Keyword::Do,
        Keyword::Else,
        Keyword::Enum,
        Keyword::Extension,
        Keyword::False,
        Keyword::For,
        Keyword::Func,
        Keyword::Guard,
        Keyword::If,
        Keyword::Import,
        Keyword::In,
        Keyword::Init,
        Keyword::Internal,
        Keyword::Is,
        Keyword::Let,
        Keyword::Nil,
        Keyword::Private,
        Keyword::Protocol,
        Keyword::Public,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::SelfLower,
        Keyword::SelfUpper,
        Keyword::Struct,
        Keyword::Switch,
        Keyword::Throw,
        Keyword::Throws,
        Keyword::True,
        Keyword::Try,
        Keyword::Type,
        Keyword::Var,
        Keyword::Where,
        Keyword::While,
    ];

    /// The reserved spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::As => "as",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Defer => "defer",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Extension => "extension",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Func => "func",
            Keyword::Guard => "guard",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Init => "init",
            Keyword::Internal => "internal",
            Keyword::Is => "is",
            Keyword::Let => "let",
            Keyword::Nil => "nil",
            Keyword::Private => "private",
            Keyword::Protocol => "protocol",
            Keyword::Public => "public",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::SelfLower => "self",
            Keyword::SelfUpper => "Self",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Throw => "throw",
            Keyword::Throws => "throws",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Type => "type",
            Keyword::Var => "var",
            Keyword::Where => "where",
            Keyword::While => "while",
        }
    }
}

/// Operators and punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Bang,
    Eq,
    Lt,
    Gt,
    Dot,
    Question,
    Colon,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    Shl,
    Shr,
    AmpAmp,
    PipePipe,
    Arrow,
    FatArrow,
    DotDot,
    DotDotLt,
    DotDotDot,
    DoubleColon,
    DoubleQuestion,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    At,
    Hash,
}

impl Operator {
    /// The fixed spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Caret => "^",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Tilde => "~",
            Operator::Bang => "!",
            Operator::Eq => "=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Dot => ".",
            Operator::Question => "?",
            Operator::Colon => ":",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::AmpAmp => "&&",
            Operator::PipePipe => "||",
            Operator::Arrow => "->",
            Operator::FatArrow => "=>",
            Operator::DotDot => "..",
            Operator::DotDotLt => "..<",
            Operator::DotDotDot => "...",
            Operator::DoubleColon => "::",
            Operator::DoubleQuestion => "??",
            Operator::PlusEq => "+=",
            Operator::MinusEq => "-=",
            Operator::StarEq => "*=",
            Operator::SlashEq => "/=",
            Operator::PercentEq => "%=",
            Operator::LParen => "(",
            Operator::RParen => ")",
            Operator::LBracket => "[",
            Operator::RBracket => "]",
            Operator::LBrace => "{",
            Operator::RBrace => "}",
            Operator::Comma => ",",
            Operator::Semicolon => ";",
            Operator::At => "@",
            Operator::Hash => "#",
        }
    }
}

/// Literal classification. Values are not parsed at this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer(Radix),
    Float,
    String,
}

impl LiteralKind {
    pub const fn name(self) -> &'static str {
        match self {
            LiteralKind::Integer(_) => "integer",
            LiteralKind::Float => "float",
            LiteralKind::String => "string",
        }
    }
}

/// Base of an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

/// Non-semantic lexemes kept for byte-exact reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    Newline,
    LineComment,
    BlockComment,
}

impl TriviaKind {
    pub const fn name(self) -> &'static str {
        match self {
            TriviaKind::Whitespace => "whitespace",
            TriviaKind::Newline => "newline",
            TriviaKind::LineComment => "line comment",
            TriviaKind::BlockComment => "block comment",
        }
    }
}

/// Why a lexeme is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedBlockComment,
    MissingRadixDigits,
}

impl MalformedKind {
    pub const fn message(self) -> &'static str {
        match self {
            MalformedKind::UnexpectedCharacter => "unexpected character",
            MalformedKind::UnterminatedString => "unterminated string literal",
            MalformedKind::UnterminatedBlockComment => "unterminated block comment",
            MalformedKind::MissingRadixDigits => "integer literal has no digits after its prefix",
        }
    }
}
