use lparse::lexer::{lex, LexErrorKind, Literal, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input)
        .expect("lexing failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn empty_input_yields_only_eof() {
    let tokens = lex("").expect("lexing failed");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn sequence_always_ends_with_eof() {
    let tokens = lex("x := 1;").expect("lexing failed");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn lex_keywords_and_identifiers() {
    assert_eq!(
        kinds("def if then else while read write foo"),
        vec![
            TokenKind::Def,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_prefixes_stay_identifiers() {
    let tokens = lex("iffy whiles reader").expect("lexing failed");
    assert!(tokens[..3]
        .iter()
        .all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].literal, Some(Literal::Ident("iffy".to_string())));
}

#[test]
fn lex_compound_operators() {
    assert_eq!(
        kinds(":= += -= *= /= %= ++ -- == != <= >= && ||"),
        vec![
            TokenKind::Assign,
            TokenKind::PlusAssign,
            TokenKind::MinusAssign,
            TokenKind::StarAssign,
            TokenKind::SlashAssign,
            TokenKind::PercentAssign,
            TokenKind::Increment,
            TokenKind::Decrement,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn maximal_munch_prefers_the_longer_operator() {
    // "+++" is "++" then "+", never three "+"
    assert_eq!(
        kinds("+++"),
        vec![TokenKind::Increment, TokenKind::Plus, TokenKind::Eof]
    );
}

#[test]
fn lex_number_values() {
    let tokens = lex("42 007 0").expect("lexing failed");
    assert_eq!(tokens[0].literal, Some(Literal::Number(42)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(7)));
    assert_eq!(tokens[2].literal, Some(Literal::Number(0)));
}

#[test]
fn lex_boolean_values() {
    let tokens = lex("true false").expect("lexing failed");
    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].literal, Some(Literal::Boolean(true)));
    assert_eq!(tokens[1].literal, Some(Literal::Boolean(false)));
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = lex("x := 1;\n  y := 2;").expect("lexing failed");

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // x
    assert_eq!((tokens[1].line, tokens[1].column), (1, 3)); // :=
    assert_eq!((tokens[2].line, tokens[2].column), (1, 6)); // 1
    assert_eq!((tokens[4].line, tokens[4].column), (2, 3)); // y
}

#[test]
fn line_comments_are_skipped() {
    let tokens = lex("1 // the rest of this line\n2").expect("lexing failed");
    assert_eq!(tokens[0].literal, Some(Literal::Number(1)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(2)));
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unexpected_character_is_reported_with_its_position() {
    let err = lex("x :=\n  @").expect_err("expected a lex error");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('@'));
    assert_eq!((err.line, err.column), (2, 3));
}

#[test]
fn lone_colon_is_an_error() {
    let err = lex("x : 1").expect_err("expected a lex error");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar(':'));
}

#[test]
fn huge_number_overflows() {
    let err = lex("99999999999999999999").expect_err("expected a lex error");
    assert_eq!(err.kind, LexErrorKind::NumberOverflow);
    assert_eq!((err.line, err.column), (1, 1));
}
