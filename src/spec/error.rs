//! Specification errors and warnings, each carrying the offending node's path.

use std::fmt;

use super::path::SpecPath;

/// What is wrong with a malformed node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecErrorKind {
    #[error("node is not an object (found {found})")]
    NotAnObject { found: &'static str },
    #[error("node has no `type` field")]
    MissingType,
    #[error("`type` must be a string (found {found})")]
    InvalidType { found: &'static str },
    #[error("`type` is empty")]
    EmptyType,
    #[error("`children` must be a string, a node or a sequence of nodes (found {found})")]
    InvalidChildren { found: &'static str },
    #[error("`properties` must be an object (found {found})")]
    InvalidProperties { found: &'static str },
    #[error("nesting exceeds the depth limit of {limit}")]
    TooDeep { limit: usize },
}

/// A malformed node, located by its path from the document root.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{path}: {kind}")]
pub struct SpecError {
    pub kind: SpecErrorKind,
    pub path: SpecPath,
}

impl SpecError {
    pub fn new(kind: SpecErrorKind, path: SpecPath) -> Self {
        Self { kind, path }
    }
}

/// Something accepted but suspicious.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecWarningKind {
    /// Literal strings appeared next to structured child nodes. The nodes are
    /// kept and the strings ignored.
    MixedChildren { ignored: usize },
    /// A children sequence held only strings; they were joined into text.
    TextSequence,
    /// The document declares a version this crate does not know.
    UnsupportedVersion { found: String },
}

impl fmt::Display for SpecWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedChildren { ignored } => write!(
                f,
                "literal text mixed with child nodes; {ignored} text entr{} ignored",
                if *ignored == 1 { "y" } else { "ies" }
            ),
            Self::TextSequence => f.write_str("children sequence holds only text; joined into one string"),
            Self::UnsupportedVersion { found } => write!(f, "unsupported spec version {found}"),
        }
    }
}

/// A validation warning with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecWarning {
    pub kind: SpecWarningKind,
    pub path: SpecPath,
}

impl SpecWarning {
    pub fn new(kind: SpecWarningKind, path: SpecPath) -> Self {
        Self { kind, path }
    }
}

impl fmt::Display for SpecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Short JSON type name for diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
