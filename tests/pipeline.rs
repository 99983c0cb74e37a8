//! End to end translations through the public API.

use wren::{
    compiler::{emit, emit_all, lex, parse, Emitter},
    transpile, ErrorKind, Node, Source, Token,
};

#[test]
fn add() {
    let source = Source::source("(add 2 2)");

    let tokens: Vec<Token> = lex(source.clone())
        .unwrap()
        .item
        .into_iter()
        .map(|t| t.item)
        .collect();
    assert_eq!(tokens, vec![
        Token::paren('('),
        Token::name("add"),
        Token::number("2"),
        Token::number("2"),
        Token::paren(')'),
    ]);

    let program = parse(source.clone()).unwrap();
    assert_eq!(program.body, vec![Node::call("add", vec![
        Node::number("2"),
        Node::number("2"),
    ])]);

    assert_eq!(emit(source).unwrap(), "add(2,2)");
}

#[test]
fn nested() {
    assert_eq!(transpile("(add 2 (subtract 4 2))").unwrap(), "add(2,subtract(4,2))");
    assert_eq!(
        transpile("(add 2 (subtract (add 3 2) 2))").unwrap(),
        "add(2,subtract(add(3,2),2))"
    );
}

#[test]
fn whitespace_is_irrelevant() {
    let spaced = transpile("  ( add\n\t2   ( subtract 4 2 ) )  ").unwrap();
    assert_eq!(spaced, transpile("(add 2 (subtract 4 2))").unwrap());
}

#[test]
fn boundaries() {
    assert_eq!(transpile("(name)").unwrap(), "name()");
    assert_eq!(transpile("42").unwrap(), "42");
    assert_eq!(transpile("").unwrap(), "");
}

#[test]
fn first_versus_all() {
    let source = Source::source("(a 1) (b 2)");
    assert_eq!(emit(source.clone()).unwrap(), "a(1)");
    assert_eq!(emit_all(source).unwrap(), "a(1)b(2)");
}

#[test]
fn unterminated() {
    let error = transpile("(add 2").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnmatchedParen);
    assert_eq!(error.offset(), Some(6));

    let report = error.to_string();
    assert!(report.contains("end of input"));
    assert!(report.contains("(add 2"));
}

#[test]
fn unexpected_character() {
    let error = transpile("(add @ 2)").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.offset(), Some(5));
    assert!(error.to_string().contains("`@`"));
}

#[test]
fn deep_nesting_ends_at_input_end() {
    let depth = 256;
    let source = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
    let program = parse(Source::source(&source)).unwrap();

    assert_eq!(program.body.len(), 1);
    assert_eq!(program.body[0].depth(), depth);

    let output = Emitter::emit(&program.body[0]);
    assert_eq!(output, format!("{}1{}", "f(".repeat(depth), ")".repeat(depth)));
}
