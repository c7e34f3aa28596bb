//! Raw token tags produced by the scanner.
//!
//! Tags are grouped into discriminant ranges by category so that category
//! checks are a single comparison:
//!
//! | Range     | Category                |
//! |-----------|-------------------------|
//! | 0-15      | identifiers & literals  |
//! | 32-79     | operators               |
//! | 80-95     | delimiters/punctuation  |
//! | 112-127   | trivia                  |
//! | 240-254   | errors                  |
//! | 255       | end of input            |

/// Longest operator spelling in bytes (`..<`, `...`).
pub const MAX_OPERATOR_LEN: usize = 3;

/// Classification of a raw token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // Identifiers & literals
    Ident = 0,
    Int = 1,
    Float = 2,
    HexInt = 3,
    OctInt = 4,
    BinInt = 5,
    String = 6,

    // Operators
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Ampersand = 38,
    Pipe = 39,
    Tilde = 40,
    Bang = 41,
    Equal = 42,
    Less = 43,
    Greater = 44,
    Dot = 45,
    Question = 46,
    Colon = 47,
    EqualEqual = 48,
    BangEqual = 49,
    LessEqual = 50,
    GreaterEqual = 51,
    Shl = 52,
    Shr = 53,
    AmpersandAmpersand = 54,
    PipePipe = 55,
    Arrow = 56,
    FatArrow = 57,
    DotDot = 58,
    DotDotLess = 59,
    DotDotDot = 60,
    ColonColon = 61,
    QuestionQuestion = 62,
    PlusEqual = 63,
    MinusEqual = 64,
    StarEqual = 65,
    SlashEqual = 66,
    PercentEqual = 67,

    // Delimiters
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    At = 88,
    Hash = 89,

    // Trivia
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // Errors
    InvalidChar = 240,
    UnterminatedString = 241,
    UnterminatedBlockComment = 242,
    MissingRadixDigits = 243,

    // Control
    Eof = 255,
}

impl RawTag {
    /// Every operator and delimiter tag, longest spellings first.
    ///
    /// This is the fixed operator table; [`RawTag::from_operator`] resolves
    /// a spelling against it.
    pub const OPERATORS: &'static [RawTag] = &[
        RawTag::DotDotLess,
        RawTag::DotDotDot,
        RawTag::EqualEqual,
        RawTag::BangEqual,
        RawTag::LessEqual,
        RawTag::GreaterEqual,
        RawTag::Shl,
        RawTag::Shr,
        RawTag::AmpersandAmpersand,
        RawTag::PipePipe,
        RawTag::Arrow,
        RawTag::FatArrow,
        RawTag::DotDot,
        RawTag::ColonColon,
        RawTag::QuestionQuestion,
        RawTag::PlusEqual,
        RawTag::MinusEqual,
        RawTag::StarEqual,
        RawTag::SlashEqual,
        RawTag::PercentEqual,
        RawTag::Plus,
        RawTag::Minus,
        RawTag::Star,
        RawTag::Slash,
        RawTag::Percent,
        RawTag::Caret,
        RawTag::Ampersand,
        RawTag::Pipe,
        RawTag::Tilde,
        RawTag::Bang,
        RawTag::Equal,
        RawTag::Less,
        RawTag::Greater,
        RawTag::Dot,
        RawTag::Question,
        RawTag::Colon,
        RawTag::LeftParen,
        RawTag::RightParen,
        RawTag::LeftBracket,
        RawTag::RightBracket,
        RawTag::LeftBrace,
        RawTag::RightBrace,
        RawTag::Comma,
        RawTag::Semicolon,
        RawTag::At,
        RawTag::Hash,
    ];

    /// The fixed spelling of this tag, if it has one.
    ///
    /// Operators and delimiters have a fixed lexeme; identifiers, literals,
    /// trivia and errors do not.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Percent => "%",
            RawTag::Caret => "^",
            RawTag::Ampersand => "&",
            RawTag::Pipe => "|",
            RawTag::Tilde => "~",
            RawTag::Bang => "!",
            RawTag::Equal => "=",
            RawTag::Less => "<",
            RawTag::Greater => ">",
            RawTag::Dot => ".",
            RawTag::Question => "?",
            RawTag::Colon => ":",
            RawTag::EqualEqual => "==",
            RawTag::BangEqual => "!=",
            RawTag::LessEqual => "<=",
            RawTag::GreaterEqual => ">=",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::PipePipe => "||",
            RawTag::Arrow => "->",
            RawTag::FatArrow => "=>",
            RawTag::DotDot => "..",
            RawTag::DotDotLess => "..<",
            RawTag::DotDotDot => "...",
            RawTag::ColonColon => "::",
            RawTag::QuestionQuestion => "??",
            RawTag::PlusEqual => "+=",
            RawTag::MinusEqual => "-=",
            RawTag::StarEqual => "*=",
            RawTag::SlashEqual => "/=",
            RawTag::PercentEqual => "%=",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::At => "@",
            RawTag::Hash => "#",
            _ => return None,
        };
        Some(text)
    }

    /// Resolve an exact operator spelling.
    pub fn from_operator(text: &[u8]) -> Option<RawTag> {
        Self::OPERATORS
            .iter()
            .copied()
            .find(|tag| tag.lexeme().is_some_and(|lexeme| lexeme.as_bytes() == text))
    }

    /// Identifiers and literals.
    #[inline]
    pub const fn is_word_or_literal(self) -> bool {
        (self as u8) < 32
    }

    /// Operators and delimiters.
    #[inline]
    pub const fn is_operator(self) -> bool {
        let v = self as u8;
        v >= 32 && v < 112
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        let v = self as u8;
        v >= 112 && v < 240
    }

    /// Lexemes that did not match any rule to completion.
    #[inline]
    pub const fn is_error(self) -> bool {
        let v = self as u8;
        v >= 240 && v < 255
    }

    /// Human-readable name for debugging and tests.
    pub const fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Int => "integer",
            RawTag::Float => "float",
            RawTag::HexInt => "hex integer",
            RawTag::OctInt => "octal integer",
            RawTag::BinInt => "binary integer",
            RawTag::String => "string",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::InvalidChar => "invalid character",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
            RawTag::MissingRadixDigits => "missing radix digits",
            RawTag::Eof => "end of input",
            _ => match self.lexeme() {
                Some(lexeme) => lexeme,
                None => "unknown",
            },
        }
    }
}

/// A raw token: tag plus byte length. Position is tracked by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: usize,
}
