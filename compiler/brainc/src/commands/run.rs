//! The `run` command: parse and evaluate a whole source file.

use brain_eval::EvalConfig;

use super::read_file;
use crate::{render_parse_error, Session, SessionError};

/// Run a source file as a single fragment and exit with its status.
pub fn run_file(path: &str, config: EvalConfig) {
    let content = read_file(path);
    let mut session = Session::new(config);
    let code = run_source(&mut session, &content, Some(path));
    if code != 0 {
        std::process::exit(code);
    }
}

/// Run `source` in `session`, returning the process exit status: 1 when it
/// does not parse or raises the error flag, 0 otherwise.
pub fn run_source(session: &mut Session, source: &str, origin: Option<&str>) -> i32 {
    match session.eval_source(source) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(SessionError::Parse(err)) => {
            let rendered = render_parse_error(source, origin, &err);
            session.interpreter().diagnostic_handler().println(&rendered);
            1
        }
    }
}
