use crowjs::lexer::{lex, token::TokenKind};

fn token_kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, diagnostics) = lex(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics: {diagnostics:?}"
    );
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn lex_variable_declaration() {
    let kinds = token_kinds("let x = 42;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident("x".into()),
            TokenKind::Assign,
            TokenKind::Number(42.0),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_arithmetic_operators() {
    let kinds = token_kinds("a + b - c * d / e % f ** g");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::Plus,
            TokenKind::Ident("b".into()),
            TokenKind::Minus,
            TokenKind::Ident("c".into()),
            TokenKind::Star,
            TokenKind::Ident("d".into()),
            TokenKind::Slash,
            TokenKind::Ident("e".into()),
            TokenKind::Percent,
            TokenKind::Ident("f".into()),
            TokenKind::StarStar,
            TokenKind::Ident("g".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_comparison_and_logic() {
    let kinds = token_kinds("a <= b >= c === d !== e && f || g ?? h");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::LessEq,
            TokenKind::Ident("b".into()),
            TokenKind::GreaterEq,
            TokenKind::Ident("c".into()),
            TokenKind::EqEqEq,
            TokenKind::Ident("d".into()),
            TokenKind::NotEqEq,
            TokenKind::Ident("e".into()),
            TokenKind::AmpAmp,
            TokenKind::Ident("f".into()),
            TokenKind::PipePipe,
            TokenKind::Ident("g".into()),
            TokenKind::NullishCoalescing,
            TokenKind::Ident("h".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_shift_and_bitwise() {
    let kinds = token_kinds("a << b >> c >>> d & e | f ^ g ~h");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::LessLess,
            TokenKind::Ident("b".into()),
            TokenKind::GreaterGreater,
            TokenKind::Ident("c".into()),
            TokenKind::GreaterGreaterGreater,
            TokenKind::Ident("d".into()),
            TokenKind::Amp,
            TokenKind::Ident("e".into()),
            TokenKind::Pipe,
            TokenKind::Ident("f".into()),
            TokenKind::Caret,
            TokenKind::Ident("g".into()),
            TokenKind::Tilde,
            TokenKind::Ident("h".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_compound_assignment() {
    let kinds = token_kinds("a += 1; a -= 1; a *= 2; a /= 2; a %= 2;");
    let ops: Vec<_> = kinds
        .into_iter()
        .filter(|k| {
            matches!(
                k,
                TokenKind::PlusEquals
                    | TokenKind::MinusEquals
                    | TokenKind::StarEquals
                    | TokenKind::SlashEquals
                    | TokenKind::PercentEquals
            )
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
        ]
    );
}

#[test]
fn lex_reserved_keywords() {
    let kinds = token_kinds("class extends super this new do in instanceof void delete");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::Extends,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::New,
            TokenKind::Do,
            TokenKind::In,
            TokenKind::Instanceof,
            TokenKind::Void,
            TokenKind::Delete,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_contextual_words_stay_identifiers() {
    let kinds = token_kinds("async await yield of get set static from as");
    for kind in &kinds[..kinds.len() - 1] {
        assert!(
            matches!(kind, TokenKind::Ident(_)),
            "expected identifier, got {kind:?}"
        );
    }
}

#[test]
fn lex_arrow_and_spread() {
    let kinds = token_kinds("(a) => ...");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::Ident("a".into()),
            TokenKind::RightParen,
            TokenKind::Arrow,
            TokenKind::DotDotDot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_string_escapes() {
    let kinds = token_kinds(r#"'a\nb' "c\td""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::String("a\nb".into()),
            TokenKind::String("c\td".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_numbers_with_fraction() {
    let kinds = token_kinds("3.14159 2000 0");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(3.14159),
            TokenKind::Number(2000.0),
            TokenKind::Number(0.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_template_with_substitution() {
    let kinds = token_kinds("`Hello, ${name}!`");
    assert_eq!(
        kinds,
        vec![
            TokenKind::TemplateHead("Hello, ".into()),
            TokenKind::Ident("name".into()),
            TokenKind::TemplateTail("!".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_template_without_substitution() {
    let kinds = token_kinds("`plain text`");
    assert_eq!(
        kinds,
        vec![TokenKind::NoSubTemplate("plain text".into()), TokenKind::Eof]
    );
}

#[test]
fn lex_template_with_nested_braces() {
    // the `}` closing the object must not end the substitution
    let kinds = token_kinds("`v${ { a: 1 }.a }w`");
    assert_eq!(
        kinds,
        vec![
            TokenKind::TemplateHead("v".into()),
            TokenKind::LeftBrace,
            TokenKind::Ident("a".into()),
            TokenKind::Colon,
            TokenKind::Number(1.0),
            TokenKind::RightBrace,
            TokenKind::Dot,
            TokenKind::Ident("a".into()),
            TokenKind::TemplateTail("w".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_template_multiple_substitutions() {
    let kinds = token_kinds("`${a} and ${b}`");
    assert_eq!(
        kinds,
        vec![
            TokenKind::TemplateHead("".into()),
            TokenKind::Ident("a".into()),
            TokenKind::TemplateMiddle(" and ".into()),
            TokenKind::Ident("b".into()),
            TokenKind::TemplateTail("".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_comments_are_skipped() {
    let kinds = token_kinds("a // line comment\n/* block\ncomment */ b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::Ident("b".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_newline_tracking() {
    let (tokens, _) = lex("a\nb c");
    assert!(!tokens[0].newline_before);
    assert!(tokens[1].newline_before, "b follows a line break");
    assert!(!tokens[2].newline_before, "c is on the same line as b");
}

#[test]
fn lex_newline_tracking_through_comments() {
    let (tokens, _) = lex("a // trailing\nb");
    assert!(tokens[1].newline_before);

    let (tokens, _) = lex("a /* spans\nlines */ b");
    assert!(tokens[1].newline_before);
}

#[test]
fn lex_line_and_column_positions() {
    let (tokens, _) = lex("let x;\n  x = 1;");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // let
    assert_eq!((tokens[1].line, tokens[1].column), (1, 5)); // x
    assert_eq!((tokens[3].line, tokens[3].column), (2, 3)); // x on line 2
}

#[test]
fn lex_spans_slice_the_source() {
    let source = "let answer = 42;";
    let (tokens, _) = lex(source);
    assert_eq!(&source[tokens[1].span.start..tokens[1].span.end], "answer");
    assert_eq!(&source[tokens[3].span.start..tokens[3].span.end], "42");
}
