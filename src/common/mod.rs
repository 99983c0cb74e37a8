//! Contains datastructures and utility functions
//! shared by every stage of the compiler.
//!
//! - Source code representation.
//! - Span annotations for error reporting.

pub mod source;
pub mod span;

pub use source::Source;
pub use span::{Span, Spanned};
