use crate::{
    common::span::{Span, Spanned},
    compiler::syntax::{Note, Syntax},
    construct::{
        token::{Token, TokenKind, Tokens},
        tree::{Node, Program},
    },
};

/// Position of the parser within the token stream.
/// Owned by a single `Parser::parse` call and threaded by
/// mutable reference through every recursive `walk`,
/// so it only ever moves forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

/// A recursive descent parser turning a flat token stream
/// into a `Program`. The tokens are never mutated;
/// all parsing state lives in the `Cursor`.
#[derive(Debug)]
pub struct Parser {
    tokens: Tokens,
    /// Points just past the last byte of the source,
    /// used to report running out of tokens.
    end: Span,
}

impl Parser {
    /// Parses a token stream into a `Program`,
    /// one top-level expression at a time,
    /// until every token has been consumed.
    pub fn parse(tokens: Spanned<Tokens>) -> Result<Program, Syntax> {
        let parser = Parser {
            end: tokens.span.tail(),
            tokens: tokens.item,
        };

        let mut cursor = Cursor::default();
        let mut body = vec![];

        while cursor.index() < parser.tokens.len() {
            body.push(parser.walk(&mut cursor, 0)?);
        }

        tracing::debug!(expressions = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    /// Returns the token under the cursor, if any.
    fn peek(&self, cursor: &Cursor) -> Option<&Spanned<Token>> {
        self.tokens.get(cursor.index())
    }

    /// Parses exactly one expression starting at the cursor,
    /// leaving the cursor on the token right after it.
    /// `depth` counts the calls currently open around it.
    fn walk(&self, cursor: &mut Cursor, depth: usize) -> Result<Node, Syntax> {
        tracing::trace!(cursor = cursor.index(), depth, "walk");

        let token = self.peek(cursor).ok_or_else(|| {
            Syntax::parse("Expected an expression, found the end of input", &self.end)
        })?;

        let node = match token.item.kind {
            TokenKind::Number => Node::NumberLiteral(token.item.text.clone()),
            TokenKind::String => Node::StringLiteral(token.item.text.clone()),
            TokenKind::Paren if token.item.is_open() => {
                return self.call(cursor, depth, &token.span)
            },
            _ => {
                return Err(Syntax::parse(
                    &format!(
                        "Expected an expression, found {} at offset {}",
                        token.item.describe(),
                        token.span.offset(),
                    ),
                    &token.span,
                ))
            },
        };

        cursor.advance();
        Ok(node)
    }

    /// Parses a call, starting with the cursor on its
    /// opening parenthesis:
    /// ```plain
    /// (name argument ...)
    /// ```
    fn call(
        &self,
        cursor: &mut Cursor,
        depth: usize,
        open: &Span,
    ) -> Result<Node, Syntax> {
        cursor.advance();

        // the function's name must directly follow the paren
        let name = match self.peek(cursor) {
            Some(Spanned { item: Token { kind: TokenKind::Name, text }, .. }) => {
                text.clone()
            },
            Some(other) => {
                return Err(Syntax::parse(
                    &format!(
                        "Expected a name after `(`, found {} at offset {}",
                        other.item.describe(),
                        other.span.offset(),
                    ),
                    &other.span,
                )
                .hint("a call starts with the name of the function being called"))
            },
            None => return Err(self.unclosed(open)),
        };
        cursor.advance();

        // collect arguments until the matching close paren
        let mut arguments = vec![];
        loop {
            match self.peek(cursor) {
                Some(token) if token.item.is_close() => break,
                Some(_) => arguments.push(self.walk(cursor, depth + 1)?),
                None => return Err(self.unclosed(open)),
            }
        }
        cursor.advance();

        Ok(Node::Call { name, arguments })
    }

    /// The error for running out of tokens inside a call.
    fn unclosed(&self, open: &Span) -> Syntax {
        Syntax::unmatched(
            &format!(
                "Unexpected end of input at offset {}, expected `)`",
                self.end.offset(),
            ),
            &self.end,
        )
        .add_note(Note::new_with_hint(
            "this call is never closed",
            &Span::combine(open, &self.end),
        ))
    }
}
