//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt::Write as _;

use brain_ir::{pretty, StringInterner};

use super::read_file;
use crate::render_parse_error;

/// The parse tree of `source`, or the rendered parse error.
pub fn parse_source(source: &str, origin: Option<&str>) -> Result<String, String> {
    let interner = StringInterner::new();
    let tokens = brain_lexer::lex(source, &interner);
    match brain_parse::parse_program(&tokens, &interner) {
        Ok(stmts) => Ok(pretty::print_tree(&stmts, &interner)),
        Err(err) => Err(render_parse_error(source, origin, &err)),
    }
}

/// One line per token: kind, then span.
pub fn lex_source(source: &str) -> String {
    let interner = StringInterner::new();
    let tokens = brain_lexer::lex(source, &interner);
    let mut out = String::new();
    for token in &tokens {
        let _ = writeln!(out, "{token:?}");
    }
    out
}

/// Parse a file and print its tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match parse_source(&content, Some(path)) {
        Ok(tree) => print!("{tree}"),
        Err(rendered) => {
            eprintln!("{rendered}");
            std::process::exit(1);
        }
    }
}

/// Lex a file and print its tokens.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = lex_source(&content);
    println!("Tokens for '{path}' ({} tokens):", tokens.lines().count());
    print!("{tokens}");
}
