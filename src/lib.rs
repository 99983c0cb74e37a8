//! # Wren
//! A tiny source-to-source compiler that turns nested
//! s-expression calls into C-style call expressions:
//!
//! ```plain
//! (add 2 (subtract 4 2))  =>  add(2,subtract(4,2))
//! ```
//!
//! ## Overview of the compilation process
//! Source code is wrapped in a `Source` and pushed through
//! three stages, each turning one datatype into the next:
//!
//! 1. `Lexer`:   `Source`  -> `Tokens`
//! 2. `Parser`:  `Tokens`  -> `Program`
//! 3. `Emitter`: `Program` -> `String`
//!
//! Any stage can fail with a `Syntax` error pointing at the
//! offending part of the source, except emission, which
//! only ever sees trees the parser has already validated.
//!
//! ```
//! assert_eq!(wren::transpile("(add 2 (subtract 4 2))").unwrap(), "add(2,subtract(4,2))");
//! assert!(wren::transpile("(add 2").is_err());
//! ```

pub mod common;
pub mod compiler;
pub mod construct;

pub use common::{Source, Span, Spanned};
pub use compiler::{emit, emit_all, lex, parse, ErrorKind, Syntax};
pub use construct::{
    token::{Token, TokenKind, Tokens},
    tree::{Node, Program},
};

/// Translates the first expression of an inline s-expression.
pub fn transpile(source: &str) -> Result<String, Syntax> {
    emit(Source::source(source))
}
