//! Reserved keyword resolution for the cooking layer.
//!
//! The lookup uses the identifier's length as a first-pass filter (reserved
//! words range from 2-9 chars), then matches against the keywords of that
//! length.

use crate::Keyword;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-9 chars and start with ASCII alpha
    if !(2..=9).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(Keyword::As),
            "do" => Some(Keyword::Do),
            "if" => Some(Keyword::If),
            "in" => Some(Keyword::In),
            "is" => Some(Keyword::Is),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            "let" => Some(Keyword::Let),
            "nil" => Some(Keyword::Nil),
            "try" => Some(Keyword::Try),
            "var" => Some(Keyword::Var),
            _ => None,
        },
        4 => match text {
            "Self" => Some(Keyword::SelfUpper),
            "case" => Some(Keyword::Case),
            "else" => Some(Keyword::Else),
            "enum" => Some(Keyword::Enum),
            "func" => Some(Keyword::Func),
            "init" => Some(Keyword::Init),
            "self" => Some(Keyword::SelfLower),
            "true" => Some(Keyword::True),
            "type" => Some(Keyword::Type),
            _ => None,
        },
        5 => match text {
            "break" => Some(Keyword::Break),
            "defer" => Some(Keyword::Defer),
            "false" => Some(Keyword::False),
            "guard" => Some(Keyword::Guard),
            "throw" => Some(Keyword::Throw),
            "where" => Some(Keyword::Where),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "import" => Some(Keyword::Import),
            "public" => Some(Keyword::Public),
            "repeat" => Some(Keyword::Repeat),
            "return" => Some(Keyword::Return),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            "throws" => Some(Keyword::Throws),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "private" => Some(Keyword::Private),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            "internal" => Some(Keyword::Internal),
            "protocol" => Some(Keyword::Protocol),
            _ => None,
        },
        9 => match text {
            "extension" => Some(Keyword::Extension),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
