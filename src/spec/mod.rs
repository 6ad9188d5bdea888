//! Specification model: typed nodes, paths, parsing and validation.

pub mod error;
pub mod node;
pub mod parse;
pub mod path;
pub mod validate;

pub use error::{SpecError, SpecErrorKind, SpecWarning, SpecWarningKind};
pub use node::{Children, Properties, SpecNode};
pub use parse::{parse_shallow, DocumentError, RawChildren, RawNode, SpecDocument, SUPPORTED_VERSION};
pub use path::{PathSegment, SpecPath};
pub use serde_json::Value;
pub use validate::{validate, validate_with_limit, ValidationReport, DEFAULT_MAX_DEPTH};
