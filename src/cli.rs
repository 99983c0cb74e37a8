use std::{path::PathBuf, rc::Rc};

use structopt::StructOpt;
use wren::Source;

/// Translated when no other input is given.
pub const DEMO: &str = "(add 2 (subtract (add 3 2) 2))";

#[derive(StructOpt, Debug)]
#[structopt(name = "Wren", bin_name = "wren", about)]
pub struct Wren {
    /// Reads the s-expression from this file
    #[structopt(parse(from_os_str))]
    pub path: Option<PathBuf>,

    /// Translates an inline s-expression instead of a file
    #[structopt(short, long, conflicts_with = "path")]
    pub expr: Option<String>,

    /// Prints every token before the output
    #[structopt(short, long)]
    pub tokens: bool,

    /// Prints the syntax tree before the output
    #[structopt(short, long)]
    pub ast: bool,

    /// Emits every top-level expression, one per line
    #[structopt(long)]
    pub all: bool,

    /// Filter for diagnostic logging, e.g. `debug` or `wren=trace`
    #[structopt(long, default_value = "warn")]
    pub log_level: String,
}

impl Wren {
    /// Whether any dump section was requested.
    pub fn dumps(&self) -> bool {
        self.tokens || self.ast
    }

    pub fn source(&self) -> Result<Rc<Source>, String> {
        match (&self.path, &self.expr) {
            (Some(path), _) => Source::path(path).map_err(|e| {
                format!("Could not read source file '{}': {}", path.display(), e)
            }),
            (None, Some(expr)) => Ok(Source::source(expr)),
            (None, None) => Ok(Source::source(DEMO)),
        }
    }
}
