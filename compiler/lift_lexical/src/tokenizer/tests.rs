use super::*;
use crate::Keyword;
use pretty_assertions::assert_eq;

/// Helper: kinds of all non-trivia tokens, including the end marker.
fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .filter(|t| !t.is_trivia())
        .map(|t| t.kind)
        .collect()
}

fn reconstruct(source: &str) -> String {
    tokenize(source).map(|t| t.text).collect()
}

// === Sequence shape ===

#[test]
fn empty_input_yields_only_end_marker() {
    let tokens: Vec<_> = tokenize("").collect();
    assert_eq!(
        tokens,
        vec![Token {
            kind: TokenKind::EndOfUnit,
            text: "",
            span: Span::point(0),
        }]
    );
}

#[test]
fn end_marker_is_last_and_unique() {
    let tokens: Vec<_> = tokenize("let x = 1\n").collect();
    let ends = tokens.iter().filter(|t| t.is_end()).count();
    assert_eq!(ends, 1);
    assert!(tokens.last().is_some_and(Token::is_end));
    assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(10)));
}

#[test]
fn iterator_is_fused() {
    let mut tokens = tokenize("x");
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_some_and(|t| t.is_end()));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn spans_are_contiguous() {
    let mut expected_start = 0;
    for token in tokenize("func f() -> Int { return 0x1F }") {
        assert_eq!(token.span.start, expected_start, "{token:?}");
        expected_start = token.span.end;
    }
}

#[test]
fn restartable() {
    let source = "var a = \"b\" // c\n";
    let first: Vec<_> = tokenize(source).collect();
    let second: Vec<_> = tokenize(source).collect();
    assert_eq!(first, second);

    let clone: Vec<_> = tokenize(source).clone().collect();
    assert_eq!(first, clone);
}

#[test]
fn size_hint_bounds_hold() {
    let source = "a + b";
    let tokens = tokenize(source);
    let (low, high) = tokens.size_hint();
    let count = tokens.count();
    assert!(low <= count);
    assert!(high.is_some_and(|h| count <= h));
}

// === Classification ===

#[test]
fn keyword_reclassification() {
    assert_eq!(
        kinds("if"),
        vec![TokenKind::Keyword(Keyword::If), TokenKind::EndOfUnit]
    );
}

#[test]
fn identifiers_that_contain_keywords_stay_identifiers() {
    assert_eq!(
        kinds("iffy letter _if"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfUnit,
        ]
    );
}

#[test]
fn longest_operator_match() {
    let tokens: Vec<_> = tokenize("==").collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Operator(Operator::EqEq));
    assert_eq!(tokens[0].text, "==");
}

#[test]
fn declaration_line() {
    assert_eq!(
        kinds("let total: Int = a + 2.5"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Colon),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Eq),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Plus),
            TokenKind::Literal(LiteralKind::Float),
            TokenKind::EndOfUnit,
        ]
    );
}

#[test]
fn literal_radixes() {
    assert_eq!(
        kinds("10 0x1F 0o7 0b1"),
        vec![
            TokenKind::Literal(LiteralKind::Integer(Radix::Decimal)),
            TokenKind::Literal(LiteralKind::Integer(Radix::Hexadecimal)),
            TokenKind::Literal(LiteralKind::Integer(Radix::Octal)),
            TokenKind::Literal(LiteralKind::Integer(Radix::Binary)),
            TokenKind::EndOfUnit,
        ]
    );
}

#[test]
fn trivia_is_preserved_and_tagged() {
    let tokens: Vec<_> = tokenize("a // note\n/* b */").collect();
    let trivia: Vec<_> = tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Trivia(kind) => Some((kind, t.text)),
            _ => None,
        })
        .collect();
    assert_eq!(
        trivia,
        vec![
            (TriviaKind::Whitespace, " "),
            (TriviaKind::LineComment, "// note"),
            (TriviaKind::Newline, "\n"),
            (TriviaKind::BlockComment, "/* b */"),
        ]
    );
}

// === Malformed recovery ===

#[test]
fn unterminated_string_yields_one_malformed_token() {
    let source = "let s = \"open\nlet t = 1";
    let tokens: Vec<_> = tokenize(source).collect();
    let malformed: Vec<_> = tokens.iter().filter(|t| t.is_malformed()).collect();
    assert_eq!(malformed.len(), 1);
    assert_eq!(
        malformed[0].kind,
        TokenKind::Malformed(MalformedKind::UnterminatedString)
    );
    assert_eq!(malformed[0].text, "\"open");
    assert!(tokens.last().is_some_and(Token::is_end));
    // Scanning resumed on the next line.
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Keyword(Keyword::Let) && t.span.start > 8));
}

#[test]
fn unexpected_characters_do_not_abort() {
    assert_eq!(
        kinds("a $ b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Malformed(MalformedKind::UnexpectedCharacter),
            TokenKind::Identifier,
            TokenKind::EndOfUnit,
        ]
    );
}

#[test]
fn malformed_block_comment_and_radix() {
    assert_eq!(
        kinds("0x /* never closed"),
        vec![
            TokenKind::Malformed(MalformedKind::MissingRadixDigits),
            TokenKind::Malformed(MalformedKind::UnterminatedBlockComment),
            TokenKind::EndOfUnit,
        ]
    );
}

// === Reconstruction ===

#[test]
fn tokens_reconstruct_source() {
    let sources = [
        "",
        "func main() {\n    print(\"hi\")\n}\n",
        "a\r\nb\r c",
        "\"broken\n$€😀",
        "/* open",
    ];
    for source in sources {
        assert_eq!(reconstruct(source), source);
    }
}

#[test]
fn cook_maps_every_operator() {
    for &tag in RawTag::OPERATORS {
        let Some(lexeme) = tag.lexeme() else {
            panic!("operator without lexeme: {tag:?}");
        };
        match cook(tag, lexeme) {
            TokenKind::Operator(op) => assert_eq!(op.as_str(), lexeme),
            other => panic!("{tag:?} cooked to {other:?}"),
        }
    }
}
