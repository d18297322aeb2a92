//! The interactive read-eval-print loop.
//!
//! Input is read through the session's input handler, the same one `read`
//! expressions use, and echoed output goes through its print and diagnostic
//! handlers. A fragment spans several lines while its braces are unbalanced.

use brain_eval::{InputHandlerImpl, PrintHandlerImpl};

use crate::{render_parse_error, ReplConfig, Session, SessionError};

pub const FAREWELL: &str = "Good bye!";

const CONTINUATION_PROMPT: &str = "... ";

/// Net count of `{` over `}` in `source`.
pub fn brace_depth(source: &str) -> i32 {
    let mut depth = 0i32;
    for ch in source.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// Run the loop until `quit` or end of input.
pub fn run_repl(session: &mut Session, config: &ReplConfig) {
    let input = session.interpreter().input_handler().clone();
    let out = session.interpreter().print_handler().clone();
    let diagnostics = session.interpreter().diagnostic_handler().clone();

    while let Some(fragment) = read_fragment(&input, &out, &diagnostics, &config.prompt) {
        match fragment.trim() {
            "" => {}
            "quit" => break,
            "tree" => out.print(&session.tree()),
            _ => {
                if let Err(SessionError::Parse(err)) = session.eval_source(&fragment) {
                    diagnostics.println(&render_parse_error(&fragment, None, &err));
                }
            }
        }
    }

    if config.farewell {
        out.println(FAREWELL);
    }
}

/// Read lines until braces balance. `None` at end of input with nothing
/// pending.
fn read_fragment(
    input: &InputHandlerImpl,
    out: &PrintHandlerImpl,
    diagnostics: &PrintHandlerImpl,
    prompt: &str,
) -> Option<String> {
    let mut fragment = String::new();
    loop {
        out.print(if fragment.is_empty() { prompt } else { CONTINUATION_PROMPT });
        match input.read_line() {
            Ok(Some(line)) => {
                fragment.push_str(&line);
                fragment.push('\n');
            }
            Ok(None) => break,
            Err(err) => {
                diagnostics.println(&format!("error reading input: {err}"));
                break;
            }
        }
        if brace_depth(&fragment) <= 0 {
            return Some(fragment);
        }
    }
    // End of input: hand back an unterminated fragment so its error shows.
    (!fragment.is_empty()).then_some(fragment)
}
