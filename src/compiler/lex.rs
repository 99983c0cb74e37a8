use std::{
    iter::{once, Iterator, Peekable},
    rc::Rc,
    str::Chars,
};

use crate::{
    common::{
        source::Source,
        span::{Span, Spanned},
    },
    compiler::syntax::Syntax,
    construct::token::{Token, Tokens},
};

macro_rules! RemainingIter {
    () => { Peekable<impl Iterator<Item = char>> };
}

#[derive(Debug)]
pub struct Lexer {
    source: Rc<Source>,
    index: usize,
    tokens: Tokens,
}

impl Lexer {
    /// Lexes a source file into a stream of tokens.
    pub fn lex(source: Rc<Source>) -> Result<Spanned<Tokens>, Syntax> {
        // get a span that spans the entire source file:
        let span = Span::new(&source, 0, source.contents.len());

        // build a base lexer for this file
        let mut lexer = Lexer {
            source,
            index: 0,
            tokens: vec![],
        };

        // prime the lexer
        lexer.strip();

        // consume all!
        while lexer.index < lexer.source.contents.len() {
            let token = lexer.next_token()?;
            lexer.tokens.push(token);
            lexer.strip();
        }

        tracing::debug!(
            tokens = lexer.tokens.len(),
            bytes = lexer.source.contents.len(),
            "lexed source"
        );
        Ok(Spanned::new(lexer.tokens, span))
    }

    /// Selects a range of a string of length `len` from the
    /// current index position.
    fn grab_from_index(&self, len: usize) -> &str {
        &self.source.contents[self.index..self.index + len]
    }

    /// Returns all characters after the current index
    /// position.
    fn remaining(&self) -> Chars<'_> {
        self.source.contents[self.index..].chars()
    }

    /// Skips whitespace, newlines included.
    fn strip(&mut self) {
        let skipped: usize = self
            .remaining()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.index += skipped;
    }

    /// Starting at the lexer's current index,
    /// consumes characters one at a time according to a
    /// `pred`icate. After the predicate returns false,
    /// the string is passed to a `wrap` function, which
    /// converts the string slice of consumed characters
    /// into a type `T`, and returns that type along
    /// with the number of bytes consumed.
    fn take_while<T>(
        &self,
        remaining: &mut RemainingIter!(),
        wrap: impl Fn(&str) -> T,
        pred: impl Fn(char) -> bool,
    ) -> (T, usize) {
        let mut len = 0;
        while let Some(n) = remaining.peek() {
            if !pred(*n) {
                break;
            }
            len += n.len_utf8();
            remaining.next();
        }
        let inside = self.grab_from_index(len);
        (wrap(inside), len)
    }

    /// Parses the next token.
    /// Expects all whitespace to be stripped.
    fn next_token(&mut self) -> Result<Spanned<Token>, Syntax> {
        let mut remaining = self.remaining().peekable();

        let (token, len) = match remaining.next() {
            Some(c @ ('(' | ')')) => (Token::paren(c), 1),

            // Name: a run of ASCII letters
            Some(c) if c.is_ascii_alphabetic() => self.take_while(
                &mut once(c).chain(remaining).peekable(),
                Token::name,
                |n| n.is_ascii_alphabetic(),
            ),

            // Number: a run of ASCII digits
            Some(c) if c.is_ascii_digit() => self.take_while(
                &mut once(c).chain(remaining).peekable(),
                Token::number,
                |n| n.is_ascii_digit(),
            ),

            // Unrecognized char
            Some(unknown) => {
                return Err(Syntax::lex(
                    &format!(
                        "Unexpected character `{}` at offset {}",
                        unknown, self.index,
                    ),
                    &Span::new(&self.source, self.index, unknown.len_utf8()),
                )
                .hint("only parentheses, names, numbers and whitespace may appear here"))
            },

            None => unreachable!("next_token called at the end of the source"),
        };

        let spanned =
            Spanned::new(token, Span::new(&self.source, self.index, len));

        self.index += len;
        Ok(spanned)
    }
}
