//! Advisory upfront validation of raw specification documents.

use serde_json::Value;

use super::error::{SpecError, SpecErrorKind, SpecWarning};
use super::parse::{check_version, parse_shallow, RawChildren};
use super::path::SpecPath;

/// Default nesting limit shared by the validator and the renderer.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Everything found wrong with a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<SpecError>,
    pub warnings: Vec<SpecWarning>,
}

impl ValidationReport {
    /// No errors. Warnings do not make a document invalid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, keeping only the first error.
    pub fn into_result(self) -> Result<Vec<SpecWarning>, SpecError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.warnings),
        }
    }
}

/// Validate a whole document with the default depth limit.
pub fn validate(value: &Value) -> ValidationReport {
    validate_with_limit(value, DEFAULT_MAX_DEPTH)
}

/// Validate a whole document.
///
/// Unlike [`SpecNode::from_value`](super::SpecNode::from_value), this keeps
/// going after an error: a malformed node is reported and its siblings are
/// still checked. Descendants of a malformed node cannot be reached and are
/// skipped.
pub fn validate_with_limit(value: &Value, max_depth: usize) -> ValidationReport {
    let mut report = ValidationReport::default();
    if let Some(warning) = check_version(value.get("version")) {
        report.warnings.push(warning);
    }
    visit(value, &SpecPath::root(), max_depth, &mut report);
    report
}

fn visit(value: &Value, path: &SpecPath, max_depth: usize, report: &mut ValidationReport) {
    if path.depth() > max_depth {
        report.errors.push(SpecError::new(
            SpecErrorKind::TooDeep { limit: max_depth },
            path.clone(),
        ));
        return;
    }
    let raw = match parse_shallow(value, path) {
        Ok(raw) => raw,
        Err(error) => {
            report.errors.push(error);
            return;
        }
    };
    report.warnings.extend(raw.warnings);
    match raw.children {
        RawChildren::Absent | RawChildren::Text(_) => {}
        RawChildren::Single(child) => visit(child, &path.child(), max_depth, report),
        RawChildren::Many(items) => {
            for (index, child) in items {
                visit(child, &path.child_at(index), max_depth, report);
            }
        }
    }
}
