//! The name -> definition environment.
//!
//! A binding holds a list's current *definition*, not its addresses; reading
//! the list evaluates the definition again. Bindings are created by
//! definitions or by the first read of an unbound name (which binds it to
//! the empty list) and are only ever overwritten, never removed.

use std::sync::Arc;

use norn_ir::{Expr, Name};
use rustc_hash::FxHashMap;

/// Read/write access to bindings during evaluation.
///
/// Implemented by the session `Environment` and by `Overlay`, the view a
/// parallel branch evaluates against. `Sync` so that both branches of a
/// parallel composition can read the same parent at once.
pub trait Bindings: Send + Sync {
    /// The current definition bound to `name`.
    fn lookup(&self, name: &str) -> Option<&Arc<Expr>>;

    /// Bind `name` to `expr`, replacing any previous binding.
    fn bind(&mut self, name: Name, expr: Arc<Expr>);
}

/// Session-scoped bindings.
///
/// Passed by mutable reference into every evaluation of a session; there is
/// no global instance.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Arc<Expr>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The definition currently bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name).map(|expr| &**expr)
    }

    /// Bind `name` to `expr` directly, without evaluating anything.
    pub fn define(&mut self, name: impl Into<Name>, expr: Expr) {
        self.bindings.insert(name.into(), Arc::new(expr));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings ordered by name.
    pub fn sorted(&self) -> Vec<(&Name, &Expr)> {
        let mut entries: Vec<(&Name, &Expr)> = self
            .bindings
            .iter()
            .map(|(name, expr)| (name, &**expr))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Bindings for Environment {
    #[inline]
    fn lookup(&self, name: &str) -> Option<&Arc<Expr>> {
        self.bindings.get(name)
    }

    #[inline]
    fn bind(&mut self, name: Name, expr: Arc<Expr>) {
        self.bindings.insert(name, expr);
    }
}

/// Copy-on-write view over a shared parent, used for one side of `|`.
///
/// Reads see the overlay's own writes first, then the parent. Writes never
/// reach the parent; the caller commits them with `into_writes` once both
/// branches have finished.
pub struct Overlay<'a> {
    parent: &'a dyn Bindings,
    writes: FxHashMap<Name, Arc<Expr>>,
}

impl<'a> Overlay<'a> {
    pub fn new(parent: &'a dyn Bindings) -> Self {
        Overlay {
            parent,
            writes: FxHashMap::default(),
        }
    }

    /// The bindings written through this overlay, to be committed to the
    /// parent.
    pub fn into_writes(self) -> FxHashMap<Name, Arc<Expr>> {
        self.writes
    }
}

impl Bindings for Overlay<'_> {
    fn lookup(&self, name: &str) -> Option<&Arc<Expr>> {
        self.writes
            .get(name)
            .or_else(|| self.parent.lookup(name))
    }

    fn bind(&mut self, name: Name, expr: Arc<Expr>) {
        self.writes.insert(name, expr);
    }
}
