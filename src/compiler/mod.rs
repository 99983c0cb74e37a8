//! This module contains the compiler implementation.
//!
//! Each step in the pipeline turns one datatype into
//! another, starting with a `Source`:
//!
//! 1. Tokens:  `lex.rs`
//! 2. Program: `parse.rs`
//! 3. Output:  `emit.rs`
//!
//! Each step also has a free function below which runs
//! every step before it, so any stage can be reached
//! straight from a `Source`.

use std::rc::Rc;

pub mod lex;
pub use lex::Lexer;

pub mod parse;
pub use parse::Parser;

pub mod emit;
pub use emit::Emitter;

pub mod syntax;
pub use syntax::{ErrorKind, Syntax};

use crate::{
    common::{Source, Spanned},
    construct::{token::Tokens, tree::Program},
};

#[inline(always)]
pub fn lex(source: Rc<Source>) -> Result<Spanned<Tokens>, Syntax> {
    Lexer::lex(source)
}

#[inline(always)]
pub fn parse(source: Rc<Source>) -> Result<Program, Syntax> {
    let tokens = lex(source)?;
    Parser::parse(tokens)
}

/// Emits the first top-level expression only.
/// An empty source emits nothing.
#[inline(always)]
pub fn emit(source: Rc<Source>) -> Result<String, Syntax> {
    let program = parse(source)?;
    Ok(program.first().map(Emitter::emit).unwrap_or_default())
}

/// Emits every top-level expression, back to back.
#[inline(always)]
pub fn emit_all(source: Rc<Source>) -> Result<String, Syntax> {
    let program = parse(source)?;
    Ok(Emitter::emit_program(&program))
}
