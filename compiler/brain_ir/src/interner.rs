//! String interner for identifiers.
//!
//! Identifiers are interned once by the lexer; everything downstream (the
//! parser, the binding tables, the evaluator) works with [`Name`] and only
//! resolves back to text when printing a diagnostic or a tree.

// Arc is needed for SharedInterner: the REPL session, the parser and the
// interpreter each hold a handle to the same table.
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

#[derive(Default)]
struct InternTable {
    map: FxHashMap<Arc<str>, Name>,
    strings: Vec<Arc<str>>,
}

/// Interner mapping identifier text to [`Name`] and back.
///
/// Interning takes `&self` (the table sits behind an `RwLock`) so a shared
/// handle can keep growing as new REPL lines introduce new identifiers.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the empty string at [`Name::EMPTY`].
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(InternTable::default()),
        };
        interner.intern("");
        interner
    }

    /// Intern `s`, returning the existing name when it was seen before.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(s) {
            return name;
        }

        let mut table = self.table.write();
        // Another handle may have inserted between the two locks.
        if let Some(&name) = table.map.get(s) {
            return name;
        }
        let index = u32::try_from(table.strings.len()).unwrap_or(u32::MAX);
        let name = Name::from_raw(index);
        let text: Arc<str> = Arc::from(s);
        table.strings.push(Arc::clone(&text));
        table.map.insert(text, name);
        name
    }

    /// Resolve a name back to its text.
    ///
    /// Names not produced by this interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> Arc<str> {
        self.table
            .read()
            .strings
            .get(name.index())
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// `true` when nothing beyond the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheaply clonable handle to a [`StringInterner`].
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
