use std::fmt;

use crate::common::span::Span;

/// Which stage of the compiler rejected the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character that can't start any token.
    Lex,
    /// Tokens that don't fit the grammar.
    Parse,
    /// The source ended while a call was still open.
    UnmatchedParen,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lex => "Lex Error",
            ErrorKind::Parse => "Parse Error",
            ErrorKind::UnmatchedParen => "Unmatched Paren Error",
        };

        write!(f, "{}", name)
    }
}

/// Represents a note attached to a Syntax error,
/// i.e. a location in source code with an optional
/// specific hint or tip.
#[derive(Debug, PartialEq, Eq)]
pub struct Note {
    pub span: Span,
    pub hint: Option<String>,
}

impl Note {
    pub fn new(span: Span) -> Note {
        Note { span, hint: None }
    }

    pub fn new_with_hint(hint: &str, span: &Span) -> Note {
        Note {
            span: span.clone(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Represents a static error found while translating.
/// Ideally, each note included should have a distinct `Span`
/// and hint. Usually, one `Note` for an error is enough.
#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
    pub kind: ErrorKind,
    pub reason: String,
    pub notes: Vec<Note>,
}

impl Syntax {
    pub fn error(kind: ErrorKind, reason: &str, span: &Span) -> Syntax {
        Syntax::error_with_note(kind, reason, Note::new(span.clone()))
    }

    pub fn lex(reason: &str, span: &Span) -> Syntax {
        Syntax::error(ErrorKind::Lex, reason, span)
    }

    pub fn parse(reason: &str, span: &Span) -> Syntax {
        Syntax::error(ErrorKind::Parse, reason, span)
    }

    pub fn unmatched(reason: &str, span: &Span) -> Syntax {
        Syntax::error(ErrorKind::UnmatchedParen, reason, span)
    }

    /// Creates a new static error, but with an added hint.
    pub fn error_with_note(kind: ErrorKind, reason: &str, note: Note) -> Syntax {
        Syntax {
            kind,
            reason: reason.to_string(),
            notes: vec![note],
        }
    }

    /// Attaches a hint to the primary note.
    pub fn hint(mut self, hint: &str) -> Self {
        if let Some(note) = self.notes.first_mut() {
            note.hint = Some(hint.to_string());
        }
        self
    }

    pub fn add_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Byte offset of the primary note.
    pub fn offset(&self) -> Option<usize> {
        self.notes.first().map(|note| note.span.offset())
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in self.notes.iter() {
            let formatted = note.span.format();

            match (&note.hint, formatted.carrots()) {
                (Some(hint), Some(carrots)) => {
                    let gutter = " ".repeat(formatted.gutter_padding());
                    writeln!(
                        f,
                        "In {}:{}:{}",
                        formatted.path,
                        formatted.start + 1,
                        formatted.start_col + 1
                    )?;
                    writeln!(f, "{} |", gutter)?;
                    writeln!(f, "{} | {}", formatted.start + 1, formatted.lines[0])?;
                    writeln!(
                        f,
                        "{} | {}{} note: {}",
                        gutter,
                        " ".repeat(formatted.start_col),
                        "^".repeat(carrots),
                        hint,
                    )?;
                },
                (Some(hint), None) => {
                    write!(f, "{}", formatted)?;
                    writeln!(f, "{} = note: {}", " ".repeat(formatted.gutter_padding()), hint)?;
                },
                (None, _) => write!(f, "{}", formatted)?,
            }
        }
        write!(f, "{}: {}", self.kind, self.reason)
    }
}

impl std::error::Error for Syntax {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::source::Source;

    #[test]
    fn error() {
        let source = Source::source("(add 2 @)");
        let error = Syntax::lex(
            "Unexpected character `@` at offset 7",
            &Span::new(&source, 7, 1),
        );

        let target = "In ./source:1:8
  |
1 | (add 2 @)
  |        ^
Lex Error: Unexpected character `@` at offset 7";

        assert_eq!(format!("{}", error), target);
        assert_eq!(error.offset(), Some(7));
    }

    #[test]
    fn hint() {
        let source = Source::source("(2 2)");
        let error = Syntax::error_with_note(
            ErrorKind::Parse,
            "Expected a name after `(`",
            Note::new_with_hint("calls start with the function's name", &Span::new(&source, 1, 1)),
        );

        let target = "In ./source:1:2
  |
1 | (2 2)
  |  ^ note: calls start with the function's name
Parse Error: Expected a name after `(`";

        assert_eq!(format!("{}", error), target);
    }

    #[test]
    fn hint_on_primary_note() {
        let source = Source::source("(2 2)");
        let span = Span::new(&source, 1, 1);
        let hint = "calls start with the function's name";

        assert_eq!(
            Syntax::parse("Expected a name after `(`", &span).hint(hint),
            Syntax::error_with_note(
                ErrorKind::Parse,
                "Expected a name after `(`",
                Note::new_with_hint(hint, &span),
            ),
        );
    }
}
