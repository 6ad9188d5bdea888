//! Diagnostics collected during a render pass.

use std::fmt;

use serde::Serialize;

use crate::spec::SpecPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What went wrong at a node. Errors of every kind are recovered locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    UnknownComponentType,
    MalformedNode,
    FactoryError,
    UnresolvedHandlerReference,
    SpecWarning,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::UnknownComponentType | Self::MalformedNode | Self::FactoryError => Severity::Error,
            Self::UnresolvedHandlerReference | Self::SpecWarning => Severity::Warning,
        }
    }
}

/// One recovered problem, located by path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub path: SpecPath,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: SpecPath, message: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            path,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: {}: {}", self.path, self.message)
    }
}
