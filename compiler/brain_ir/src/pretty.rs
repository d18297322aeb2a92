//! Tree rendering for the REPL `tree` command.

use std::fmt::Write;

use crate::{NodeRef, Stmt, StringInterner};

/// Render a top-level statement sequence as an indented tree.
///
/// ```text
/// Program
/// ├── DeclareStmt `new <var> := <expr>`
/// │   ├── Identifier `x`
/// │   └── Number `1`
/// └── Write `write <expr>`
///     └── Identifier `x`
/// ```
pub fn print_tree(stmts: &[Stmt], interner: &StringInterner) -> String {
    let mut out = String::from("Program\n");
    let count = stmts.len();
    for (i, stmt) in stmts.iter().enumerate() {
        write_node(&mut out, NodeRef::Stmt(stmt), interner, "", i + 1 == count);
    }
    out
}

fn write_node(out: &mut String, node: NodeRef<'_>, interner: &StringInterner, prefix: &str, last: bool) {
    let branch = if last { "└── " } else { "├── " };
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{prefix}{branch}{}", node.label(interner));

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, interner, &child_prefix, i + 1 == count);
    }
}

#[cfg(test)]
mod tests;
