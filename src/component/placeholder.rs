//! Placeholder: the visible stand-in for a node that could not be rendered.

use std::any::Any;
use std::fmt;

use super::traits::Component;
use crate::spec::SpecPath;

/// Why a node was replaced by a placeholder.
///
/// The rendered output looks the same for every reason; the reason is kept
/// so hosts and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderReason {
    /// The node's `type` is not registered.
    UnknownComponent,
    /// The node itself is malformed (missing type, bad children, too deep).
    MalformedNode,
    /// The factory returned an error or panicked.
    FactoryFailed,
}

impl PlaceholderReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownComponent => "unknown-component",
            Self::MalformedNode => "malformed-node",
            Self::FactoryFailed => "factory-failed",
        }
    }
}

impl fmt::Display for PlaceholderReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible fallback rendered in place of a broken node.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub reason: PlaceholderReason,
    /// The declared type, when the node had a readable one.
    pub type_name: Option<String>,
    pub path: SpecPath,
    pub message: String,
}

impl Placeholder {
    pub fn new(
        reason: PlaceholderReason,
        type_name: Option<String>,
        path: SpecPath,
        message: impl Into<String>,
    ) -> Self {
        Self {
            reason,
            type_name,
            path,
            message: message.into(),
        }
    }

    /// Human-readable diagnostic shown inside the placeholder.
    pub fn diagnostic(&self) -> String {
        match &self.type_name {
            Some(kind) => format!("{} `{kind}` at {}: {}", self.reason, self.path, self.message),
            None => format!("{} at {}: {}", self.reason, self.path, self.message),
        }
    }
}

impl Component for Placeholder {
    fn component_type(&self) -> &str {
        "Placeholder"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![("data-placeholder".to_owned(), self.reason.to_string())];
        if let Some(kind) = &self.type_name {
            attrs.push(("data-type".to_owned(), kind.clone()));
        }
        attrs.push(("data-path".to_owned(), self.path.to_string()));
        attrs.push(("role".to_owned(), "alert".to_owned()));
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
