use super::*;

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(Keyword::If));
    assert_eq!(lookup("else"), Some(Keyword::Else));
    assert_eq!(lookup("guard"), Some(Keyword::Guard));
    assert_eq!(lookup("for"), Some(Keyword::For));
    assert_eq!(lookup("while"), Some(Keyword::While));
    assert_eq!(lookup("repeat"), Some(Keyword::Repeat));
    assert_eq!(lookup("switch"), Some(Keyword::Switch));
    assert_eq!(lookup("case"), Some(Keyword::Case));
    assert_eq!(lookup("break"), Some(Keyword::Break));
    assert_eq!(lookup("continue"), Some(Keyword::Continue));
    assert_eq!(lookup("return"), Some(Keyword::Return));
}

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("let"), Some(Keyword::Let));
    assert_eq!(lookup("var"), Some(Keyword::Var));
    assert_eq!(lookup("func"), Some(Keyword::Func));
    assert_eq!(lookup("struct"), Some(Keyword::Struct));
    assert_eq!(lookup("enum"), Some(Keyword::Enum));
    assert_eq!(lookup("protocol"), Some(Keyword::Protocol));
    assert_eq!(lookup("extension"), Some(Keyword::Extension));
    assert_eq!(lookup("import"), Some(Keyword::Import));
}

#[test]
fn self_is_case_sensitive() {
    assert_eq!(lookup("self"), Some(Keyword::SelfLower));
    assert_eq!(lookup("Self"), Some(Keyword::SelfUpper));
    assert_eq!(lookup("SELF"), None);
}

#[test]
fn every_keyword_round_trips() {
    for &kw in Keyword::ALL {
        assert_eq!(lookup(kw.as_str()), Some(kw), "{kw:?}");
    }
}

#[test]
fn non_keywords() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("letter"), None);
    assert_eq!(lookup("extensions"), None);
    assert_eq!(lookup(""), None);
}
