use std::fmt::Display;

use crate::common::span::Spanned;

/// The classes of token the lexer can output.
/// `String` is part of the grammar the parser understands,
/// but the lexer never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, proptest_derive::Arbitrary)]
pub enum TokenKind {
    Paren,
    Name,
    Number,
    String,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Paren => "paren",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::String => "string",
        };

        write!(f, "{}", name)
    }
}

/// A single lexical unit: its class plus the literal text it
/// was lexed from. `Token`s can be spanned using
/// `Spanned<Token>`.
#[derive(Debug, Clone, PartialEq, Eq, proptest_derive::Arbitrary)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

pub type Tokens = Vec<Spanned<Token>>;

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
        }
    }

    pub fn paren(paren: char) -> Token {
        Token {
            kind: TokenKind::Paren,
            text: paren.to_string(),
        }
    }

    pub fn name(name: &str) -> Token {
        Token::new(TokenKind::Name, name)
    }

    pub fn number(number: &str) -> Token {
        Token::new(TokenKind::Number, number)
    }

    pub fn string(string: &str) -> Token {
        Token::new(TokenKind::String, string)
    }

    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }

    /// How the token reads in an error message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Paren if self.is_open() => "an opening parenthesis".to_string(),
            TokenKind::Paren => "a closing parenthesis".to_string(),
            TokenKind::Name => format!("the name `{}`", self.text),
            TokenKind::Number => format!("the number `{}`", self.text),
            TokenKind::String => format!("the string `{}`", self.text),
        }
    }
}

impl Display for Token {
    /// One line of the token dump: `<kind> <text>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.text)
    }
}

/// Renders a token stream one token per line.
pub fn dump(tokens: &[Spanned<Token>]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\n", token.item))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::{Source, Span};

    #[test]
    fn parens() {
        assert!(Token::paren('(').is_open());
        assert!(Token::paren(')').is_close());
        assert!(!Token::name("add").is_open());
        assert!(!Token::number("2").is_close());
    }

    #[test]
    fn dump_lines() {
        let source = Source::source("(add 2)");
        let tokens = vec![
            Spanned::new(Token::paren('('), Span::new(&source, 0, 1)),
            Spanned::new(Token::name("add"), Span::new(&source, 1, 3)),
            Spanned::new(Token::number("2"), Span::new(&source, 5, 1)),
            Spanned::new(Token::paren(')'), Span::new(&source, 6, 1)),
        ];

        assert_eq!(dump(&tokens), "paren (\nname add\nnumber 2\nparen )\n");
    }

    #[test]
    fn describe() {
        assert_eq!(Token::paren(')').describe(), "a closing parenthesis");
        assert_eq!(Token::name("add").describe(), "the name `add`");
    }
}
