//! Logging setup for the `brain` binary.
//!
//! Library crates only emit `tracing` events. The binary installs a
//! subscriber here, and only when `BRAIN_LOG` or `RUST_LOG` is set, so a
//! plain run prints nothing but program output. Logs go to stderr.
//!
//! ```text
//! BRAIN_LOG=brain_eval=trace brain run prog.brain     # flat event log
//! BRAIN_LOG=debug BRAIN_LOG_TREE=1 brain              # nested call tree
//! ```

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var("BRAIN_LOG").or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("warning: ignoring invalid log filter `{directives}`: {err}");
            EnvFilter::new("warn")
        });

        let tree = std::env::var("BRAIN_LOG_TREE").is_ok_and(|v| v == "1");
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(tree_layer)
            .with(fmt_layer)
            .with(filter)
            .init();
    });
}
