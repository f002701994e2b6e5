use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Handle to a scope stored in an [`EnvArena`].
///
/// Scopes refer to their parents through handles rather than pointers, so
/// the global scope and the method values it holds can reference each other
/// freely without ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// One lexical scope: a name-to-value mapping plus an optional parent link.
#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    parent:   Option<ScopeId>,
}

/// Arena owning every scope created during one evaluation.
///
/// Slot 0 is the global scope and lives for the whole evaluation. Scopes
/// created for a method call are reclaimed with [`EnvArena::truncate`] when
/// the call returns; this is sound because methods are defined only at the
/// top level, so a method value can only ever capture the global scope and
/// no call-local scope outlives its call.
#[derive(Debug)]
pub struct EnvArena {
    scopes: Vec<Scope>,
}

impl EnvArena {
    /// Creates an arena containing just the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()], }
    }

    /// Returns the handle of the global scope.
    #[must_use]
    pub const fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a new empty scope whose lookups fall through to `parent`.
    ///
    /// # Example
    /// ```
    /// use quando::interpreter::{env::EnvArena, value::Value};
    ///
    /// let mut arena = EnvArena::new();
    /// let global = arena.global();
    /// arena.define(global, "x", Value::Int(1));
    ///
    /// let inner = arena.child(global);
    /// assert_eq!(arena.lookup(inner, "x"), Some(&Value::Int(1)));
    /// ```
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 parent:   Some(parent), });
        id
    }

    /// Binds `name` to `value` in the given scope, replacing any existing
    /// binding in that scope. Bindings in parent scopes are never touched;
    /// shadowing in a child scope leaves the outer binding intact.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: Value) {
        self.scopes[scope.0].bindings.insert(name.to_string(), value);
    }

    /// Resolves `name` starting at `scope` and walking parent links
    /// outward. Returns the first binding found, or `None` if no scope in
    /// the chain binds the name.
    ///
    /// # Example
    /// ```
    /// use quando::interpreter::{env::EnvArena, value::Value};
    ///
    /// let mut arena = EnvArena::new();
    /// let global = arena.global();
    /// let inner = arena.child(global);
    ///
    /// arena.define(global, "x", Value::Int(1));
    /// arena.define(inner, "x", Value::Int(2));
    ///
    /// assert_eq!(arena.lookup(inner, "x"), Some(&Value::Int(2)));
    /// assert_eq!(arena.lookup(global, "x"), Some(&Value::Int(1)));
    /// assert_eq!(arena.lookup(inner, "y"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            current = scope.parent;
        }

        None
    }

    /// Returns the number of scopes currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if the arena holds no scopes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Discards every scope with index `mark` or higher.
    ///
    /// Callers must only pass a `mark` taken from [`EnvArena::len`] at a
    /// point where no handle at or above it is still reachable.
    pub fn truncate(&mut self, mark: usize) {
        self.scopes.truncate(mark);
    }
}

impl Default for EnvArena {
    fn default() -> Self {
        Self::new()
    }
}
