//! Bound action handlers and the events passed to them.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::spec::SpecPath;

/// Delivered to a handler when the host fires an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    /// The action name the specification referred to.
    pub action: String,
    /// Path of the node whose property held the reference.
    pub path: SpecPath,
    /// Host-supplied payload (e.g. the new `open` state of a popover).
    pub payload: Value,
}

type Callback = dyn Fn(&ActionEvent) + Send + Sync;

/// A named callable bound into a rendered property.
///
/// Cloning is cheap. A no-op handler stands in for references with no entry
/// in the handler table; invoking it does nothing.
#[derive(Clone)]
pub struct Handler {
    name: String,
    path: SpecPath,
    callback: Option<Arc<Callback>>,
}

impl Handler {
    pub(crate) fn bound(name: impl Into<String>, path: SpecPath, callback: Arc<Callback>) -> Self {
        Self {
            name: name.into(),
            path,
            callback: Some(callback),
        }
    }

    /// An inert handler for an unresolved reference.
    pub fn noop(name: impl Into<String>, path: SpecPath) -> Self {
        Self {
            name: name.into(),
            path,
            callback: None,
        }
    }

    /// The action name this handler was bound from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the node the handler is attached to.
    pub fn path(&self) -> &SpecPath {
        &self.path
    }

    pub fn is_noop(&self) -> bool {
        self.callback.is_none()
    }

    /// Fire the action with a payload.
    pub fn invoke(&self, payload: Value) {
        if let Some(callback) = &self.callback {
            callback(&ActionEvent {
                action: self.name.clone(),
                path: self.path.clone(),
                payload,
            });
        }
    }

    /// Whether both handlers call the same closure.
    pub fn same_callback(&self, other: &Handler) -> bool {
        match (&self.callback, &other.callback) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            write!(f, "Handler(noop {:?})", self.name)
        } else {
            write!(f, "Handler({:?})", self.name)
        }
    }
}

impl PartialEq for Handler {
    /// Handlers compare by name, attachment and identity of the callback.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.path == other.path && self.same_callback(other)
    }
}
