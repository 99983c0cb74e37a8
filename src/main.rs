use std::io::{self, Write};

use structopt::StructOpt;
use wren::{
    compiler::{Emitter, Lexer, Parser},
    construct::token,
    Node,
};

// argument parser and configuration
pub mod cli;
pub mod status;

use crate::{cli::Wren, status::Status};

fn section(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "-----{}-----", name)
}

fn run(args: &Wren, out: &mut impl Write) -> Result<(), String> {
    let source = args.source()?;
    tracing::info!(path = %source.path.display(), "translating");

    // run every stage before printing anything,
    // so a failed translation produces no output
    let tokens = Lexer::lex(source).map_err(|e| e.to_string())?;
    let dumped_tokens = token::dump(&tokens.item);
    let program = Parser::parse(tokens).map_err(|e| e.to_string())?;

    if program.body.is_empty() {
        Status::warn().log("Nothing to translate, the source is empty");
        return Ok(());
    }

    // default to the first expression only
    let nodes = if args.all { &program.body[..] } else { &program.body[..1] };

    write_output(args, out, &dumped_tokens, nodes)
        .map_err(|e| format!("Could not write output: {}", e))
}

fn write_output(
    args: &Wren,
    out: &mut impl Write,
    dumped_tokens: &str,
    nodes: &[Node],
) -> io::Result<()> {
    if args.tokens {
        section(out, "Tokens")?;
        write!(out, "{}", dumped_tokens)?;
    }

    if args.ast {
        section(out, "AST")?;
        for node in nodes {
            write!(out, "{}", node.dump())?;
        }
    }

    if args.dumps() {
        section(out, "output")?;
    }

    for node in nodes {
        writeln!(out, "{}", Emitter::emit(node))?;
    }

    out.flush()
}

fn main() {
    let args = Wren::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .with_writer(io::stderr)
        .init();

    if let Err(message) = run(&args, &mut io::stdout().lock()) {
        Status::fatal().log(&message);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn translate(args: &[&str]) -> (Result<(), String>, String) {
        let args = Wren::from_iter(std::iter::once("wren").chain(args.iter().copied()));
        let mut out = vec![];
        let result = run(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn expr() {
        let (result, out) = translate(&["-e", "(add 2 2)"]);
        assert_eq!(result, Ok(()));
        assert_eq!(out, "add(2,2)\n");
    }

    #[test]
    fn demo_without_input() {
        let (result, out) = translate(&[]);
        assert_eq!(result, Ok(()));
        assert_eq!(out, "add(2,subtract(add(3,2),2))\n");
    }

    #[test]
    fn path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(subtract 4\n  (add 1 1))\n").unwrap();
        let path = file.path().to_str().unwrap();

        let (result, out) = translate(&[path]);
        assert_eq!(result, Ok(()));
        assert_eq!(out, "subtract(4,add(1,1))\n");
    }

    #[test]
    fn missing_path() {
        let (result, out) = translate(&["does/not/exist.sexp"]);
        assert!(result.unwrap_err().contains("does/not/exist.sexp"));
        assert!(out.is_empty());
    }

    #[test]
    fn error_prints_nothing() {
        let (result, out) = translate(&["-t", "-e", "(add 2"]);
        assert!(result.unwrap_err().contains("Unmatched Paren Error"));
        assert!(out.is_empty());

        let (result, out) = translate(&["-a", "-e", "(add @)"]);
        assert!(result.unwrap_err().contains("Lex Error"));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_source() {
        let (result, out) = translate(&["-e", "   "]);
        assert_eq!(result, Ok(()));
        assert!(out.is_empty());
    }

    #[test]
    fn header_only_with_dumps() {
        let (_, plain) = translate(&["-e", "(add 2 2)"]);
        assert!(!plain.contains("-----output-----"));

        let (result, out) = translate(&["-a", "-e", "(add 2 2)"]);
        assert_eq!(result, Ok(()));
        assert!(out.starts_with("-----AST-----\n"));
        assert!(out.ends_with("-----output-----\nadd(2,2)\n"));
        assert!(!out.contains("-----Tokens-----"));

        let (_, out) = translate(&["-t", "-e", "(add 2 2)"]);
        assert!(out.starts_with("-----Tokens-----\n"));
        assert!(out.ends_with("-----output-----\nadd(2,2)\n"));
    }

    #[test]
    fn first_expression_by_default() {
        let (_, out) = translate(&["-e", "(a 1) (b 2)"]);
        assert_eq!(out, "a(1)\n");
    }

    #[test]
    fn all_expressions() {
        let (result, out) = translate(&["--all", "-e", "(a 1) 3 (b 2)"]);
        assert_eq!(result, Ok(()));
        assert_eq!(out, "a(1)\n3\nb(2)\n");
    }
}
