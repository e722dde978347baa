use std::collections::HashMap;

/// Maps variable names to numeric values.
///
/// The store is long-lived: it outlives any single expression's tree and is
/// passed by mutable reference into evaluation. Lookup returns an
/// `Option`, so "not bound" and "bound to NaN" are distinguishable
/// outcomes.
///
/// # Examples
/// ```
/// use exprwhizz::interpreter::store::VarStore;
///
/// let mut vars = VarStore::new();
/// vars.store("x", 5.0);
/// assert_eq!(vars.retrieve("x"), Some(5.0));
/// assert!(vars.contains("x"));
///
/// vars.delete("x");
/// assert_eq!(vars.retrieve("x"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VarStore {
    bindings: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl VarStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Binds `name` to `value`, overwriting any prior binding.
    pub fn store(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_owned(), value);
    }

    /// Looks up the value bound to `name`, or `None` if it is not bound.
    #[must_use]
    pub fn retrieve(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Reports whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Removes the binding for `name`, if any.
    pub fn delete(&mut self, name: &str) {
        self.bindings.remove(name);
    }
}
