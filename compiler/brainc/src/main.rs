//! The `brain` command-line driver.

use brainc::commands::{lex_file, parse_file, run_file, run_repl};
use brainc::tracing_setup::init_tracing;
use brainc::{ReplConfig, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    match command {
        "repl" => {
            let (config, _) = config_or_exit(args.get(2..).unwrap_or_default());
            let mut session = Session::new(config.eval.clone());
            run_repl(&mut session, &config);
        }
        // Options straight after the binary name also start the REPL.
        flag if flag.starts_with('-') && !is_meta_flag(flag) => {
            let (config, _) = config_or_exit(&args[1..]);
            let mut session = Session::new(config.eval.clone());
            run_repl(&mut session, &config);
        }
        "run" => {
            let (config, positional) = config_or_exit(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: brain run <file.brain> [--max-depth=<n>]");
                std::process::exit(1);
            };
            run_file(path, config.eval);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: brain parse <file.brain>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: brain lex <file.brain>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("brain {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("brain"))
            {
                let (config, _) = config_or_exit(&args[2..]);
                run_file(command, config.eval);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn is_meta_flag(arg: &str) -> bool {
    matches!(arg, "--help" | "-h" | "--version" | "-v")
}

fn config_or_exit(args: &[String]) -> (ReplConfig, Vec<String>) {
    match ReplConfig::from_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("brain: an interpreter for a small imperative language with closures");
    println!();
    println!("Usage: brain [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive loop (default)");
    println!("  run <file.brain>     Evaluate a program");
    println!("  parse <file.brain>   Print the parse tree");
    println!("  lex <file.brain>     Print the token stream");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Limit closure call depth (env BRAIN_MAX_DEPTH)");
    println!("  --prompt=<text>      REPL prompt (env BRAIN_PROMPT)");
    println!("  -q, --quiet          Do not print the farewell line");
    println!();
    println!("Logging is off unless BRAIN_LOG or RUST_LOG is set;");
    println!("BRAIN_LOG_TREE=1 switches to indented span trees.");
}
