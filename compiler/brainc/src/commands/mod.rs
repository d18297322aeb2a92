//! Command implementations for the `brain` binary.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{brace_depth, run_repl, FAREWELL};
pub use run::{run_file, run_source};

/// Read a source file, exiting with status 1 if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
