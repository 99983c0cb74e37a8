//! The datastructures handed from one compiler stage to the
//! next: tokens out of the lexer, the tree out of the parser.

pub mod token;
pub mod tree;
pub mod visit;
