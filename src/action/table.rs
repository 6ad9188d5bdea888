//! Handler table: the side table pairing action names with callables.
//!
//! Specifications only carry action names, so they stay serializable. The
//! host supplies a [`HandlerTable`] at render time to give those names live
//! behavior.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::handler::{ActionEvent, Handler};
use crate::spec::SpecPath;

type Callback = dyn Fn(&ActionEvent) + Send + Sync;

/// Mapping from action name to callable.
#[derive(Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Arc<Callback>>,
}

impl HandlerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler (builder).
    pub fn with(mut self, name: impl Into<String>, f: impl Fn(&ActionEvent) + Send + Sync + 'static) -> Self {
        self.register(name, f);
        self
    }

    /// Register a handler. Replaces any existing handler of the same name.
    pub fn register(&mut self, name: impl Into<String>, f: impl Fn(&ActionEvent) + Send + Sync + 'static) {
        self.handlers.insert(name.into(), Arc::new(f));
    }

    /// Remove a handler. Returns whether one was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Bind `name` for the node at `path`, if registered.
    pub fn get(&self, name: &str, path: &SpecPath) -> Option<Handler> {
        self.handlers
            .get(name)
            .map(|callback| Handler::bound(name, path.clone(), Arc::clone(callback)))
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("handlers", &self.names())
            .finish()
    }
}
