//! REPL sessions driven by scripted input, with output and diagnostics
//! captured in buffers.

use brain_eval::{buffer_handler, scripted_handler, SharedPrintHandler};
use brainc::commands::{brace_depth, run_repl};
use brainc::{ReplConfig, Session};
use pretty_assertions::assert_eq;

struct Transcript {
    output: String,
    diagnostics: String,
}

fn config() -> ReplConfig {
    ReplConfig {
        prompt: "> ".to_owned(),
        ..ReplConfig::default()
    }
}

fn repl_with(config: &ReplConfig, lines: &[&str]) -> Transcript {
    let out: SharedPrintHandler = buffer_handler();
    let diagnostics = buffer_handler();
    let input = scripted_handler(lines.iter().copied());
    let mut session = Session::with_builder(|builder| {
        builder
            .config(config.eval.clone())
            .print_handler(out.clone())
            .diagnostic_handler(diagnostics.clone())
            .input_handler(input)
    });
    run_repl(&mut session, config);
    Transcript {
        output: out.take_output(),
        diagnostics: diagnostics.take_output(),
    }
}

fn repl(lines: &[&str]) -> Transcript {
    repl_with(&config(), lines)
}

#[test]
fn bindings_persist_across_fragments() {
    let t = repl(&["new x := 5", "write x", "quit"]);
    assert_eq!(t.output, "> > 5\n> Good bye!\n");
    assert_eq!(t.diagnostics, "");
}

#[test]
fn end_of_input_exits() {
    let t = repl(&["write 1"]);
    assert_eq!(t.output, "> 1\n> Good bye!\n");
}

#[test]
fn quiet_skips_farewell() {
    let quiet = ReplConfig {
        farewell: false,
        ..config()
    };
    let t = repl_with(&quiet, &["write 1", "quit"]);
    assert_eq!(t.output, "> 1\n> ");
}

#[test]
fn blank_lines_are_skipped() {
    let t = repl(&["", "   ", "write 2"]);
    assert_eq!(t.output, "> > > 2\n> Good bye!\n");
}

#[test]
fn open_braces_continue_the_fragment() {
    let t = repl(&["new i := 0", "while i < 2 {", "write i", "i := i + 1", "}", "quit"]);
    assert_eq!(t.output, "> > ... ... ... 0\n1\n> Good bye!\n");
}

#[test]
fn tree_prints_the_accumulated_program() {
    let t = repl(&["new x := 1", "tree", "quit"]);
    assert!(
        t.output.contains(
            "Program\n└── DeclareStmt `new <var> := <expr>`\n    ├── Identifier `x`\n    └── Number `1`\n"
        ),
        "unexpected output: {}",
        t.output
    );
}

#[test]
fn parse_error_is_rendered_and_the_session_continues() {
    let t = repl(&["new x 1", "new x := 3", "write x", "quit"]);
    assert_eq!(
        t.diagnostics,
        "error: expected `:=`, found integer `1`\n \
         --> 1:7\n  |\n1 | new x 1\n  |       ^\n"
    );
    assert!(t.output.ends_with("3\n> Good bye!\n"));
}

#[test]
fn runtime_error_is_cleared_for_the_next_fragment() {
    let t = repl(&["write 1 / 0", "write 2", "quit"]);
    assert_eq!(t.diagnostics, "ERROR: Division by zero!\n");
    assert_eq!(t.output, "> > 2\n> Good bye!\n");
}

#[test]
fn read_consumes_the_following_line() {
    let t = repl(&["new x := read", "7", "write x + 1", "quit"]);
    assert_eq!(t.output, "> read> > 8\n> Good bye!\n");
}

#[test]
fn unterminated_block_at_end_of_input_reports() {
    let t = repl(&["while true {"]);
    assert!(
        t.diagnostics.starts_with("error: expected `}`, found end of input"),
        "unexpected diagnostics: {}",
        t.diagnostics
    );
}

#[test]
fn brace_depth_counts_net_braces() {
    assert_eq!(brace_depth("if true {"), 1);
    assert_eq!(brace_depth("{ { } "), 1);
    assert_eq!(brace_depth("}"), -1);
    assert_eq!(brace_depth("write 1"), 0);
}
