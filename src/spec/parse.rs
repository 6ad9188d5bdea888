//! One-node parsing of raw JSON specification documents.
//!
//! [`parse_shallow`] checks a single node and classifies its children without
//! descending into them. The strict parser, the validator and the renderer all
//! build on it, so the three agree on what a well-formed node is.

use std::borrow::Cow;

use serde_json::Value;

use super::error::{json_kind, SpecError, SpecErrorKind, SpecWarning, SpecWarningKind};
use super::node::{Properties, SpecNode};
use super::path::SpecPath;

/// The only document version this crate understands.
pub const SUPPORTED_VERSION: u64 = 1;

const TYPE_KEY: &str = "type";
const CHILDREN_KEY: &str = "children";
const PROPERTIES_KEY: &str = "properties";
const VERSION_KEY: &str = "version";

/// Children of a shallowly parsed node. Nested nodes are left unparsed.
#[derive(Debug, Clone, PartialEq)]
pub enum RawChildren<'a> {
    Absent,
    Text(Cow<'a, str>),
    Single(&'a Value),
    /// Node entries with their index in the source sequence.
    Many(Vec<(usize, &'a Value)>),
}

/// A single node with its own fields checked.
#[derive(Debug, Clone, PartialEq)]
pub struct RawNode<'a> {
    pub kind: &'a str,
    pub properties: Properties,
    pub children: RawChildren<'a>,
    pub warnings: Vec<SpecWarning>,
}

/// Parse one node, leaving nested nodes as raw values.
///
/// Properties come from the optional `properties` object first, then from
/// every other key of the node; inline keys win on conflict. At the root the
/// `version` key is reserved.
pub fn parse_shallow<'a>(value: &'a Value, path: &SpecPath) -> Result<RawNode<'a>, SpecError> {
    let err = |kind| SpecError::new(kind, path.clone());

    let object = value.as_object().ok_or_else(|| {
        err(SpecErrorKind::NotAnObject {
            found: json_kind(value),
        })
    })?;

    let kind = match object.get(TYPE_KEY) {
        None => return Err(err(SpecErrorKind::MissingType)),
        Some(Value::String(kind)) if kind.trim().is_empty() => {
            return Err(err(SpecErrorKind::EmptyType))
        }
        Some(Value::String(kind)) => kind.as_str(),
        Some(other) => {
            return Err(err(SpecErrorKind::InvalidType {
                found: json_kind(other),
            }))
        }
    };

    let mut properties = Properties::new();
    match object.get(PROPERTIES_KEY) {
        None | Some(Value::Null) => {}
        Some(Value::Object(declared)) => {
            properties.extend(declared.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Some(other) => {
            return Err(err(SpecErrorKind::InvalidProperties {
                found: json_kind(other),
            }))
        }
    }
    for (key, value) in object {
        let reserved = matches!(key.as_str(), TYPE_KEY | CHILDREN_KEY | PROPERTIES_KEY)
            || (key == VERSION_KEY && path.is_root());
        if !reserved {
            properties.insert(key.clone(), value.clone());
        }
    }

    let mut warnings = Vec::new();
    let children = match object.get(CHILDREN_KEY) {
        None | Some(Value::Null) => RawChildren::Absent,
        Some(Value::String(text)) => RawChildren::Text(Cow::Borrowed(text.as_str())),
        Some(child @ Value::Object(_)) => RawChildren::Single(child),
        Some(Value::Array(items)) => parse_sequence(items, path, &mut warnings)?,
        Some(other) => {
            return Err(err(SpecErrorKind::InvalidChildren {
                found: json_kind(other),
            }))
        }
    };

    Ok(RawNode {
        kind,
        properties,
        children,
        warnings,
    })
}

/// Classify a children array.
///
/// Structured nodes take precedence over literal strings in the same array.
/// An array of only strings is joined into text. Anything else is malformed.
fn parse_sequence<'a>(
    items: &'a [Value],
    path: &SpecPath,
    warnings: &mut Vec<SpecWarning>,
) -> Result<RawChildren<'a>, SpecError> {
    let mut nodes = Vec::with_capacity(items.len());
    let mut texts = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(_) => nodes.push((index, item)),
            Value::String(text) => texts.push(text.as_str()),
            other => {
                return Err(SpecError::new(
                    SpecErrorKind::InvalidChildren {
                        found: json_kind(other),
                    },
                    path.child_at(index),
                ))
            }
        }
    }

    if texts.is_empty() {
        return Ok(RawChildren::Many(nodes));
    }
    if nodes.is_empty() {
        warnings.push(SpecWarning::new(SpecWarningKind::TextSequence, path.child()));
        return Ok(RawChildren::Text(Cow::Owned(texts.concat())));
    }
    warnings.push(SpecWarning::new(
        SpecWarningKind::MixedChildren {
            ignored: texts.len(),
        },
        path.child(),
    ));
    Ok(RawChildren::Many(nodes))
}

/// Check a document-level `version` field, if any.
pub(crate) fn check_version(version: Option<&Value>) -> Option<SpecWarning> {
    let version = version?;
    if version.as_u64() == Some(SUPPORTED_VERSION)
        || version.as_str() == Some(SUPPORTED_VERSION.to_string().as_str())
    {
        return None;
    }
    Some(SpecWarning::new(
        SpecWarningKind::UnsupportedVersion {
            found: version.to_string(),
        },
        SpecPath::root(),
    ))
}

/// A full specification document: the root node plus an optional version.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    pub version: Option<Value>,
    pub root: SpecNode,
}

impl SpecDocument {
    /// Wrap a root node without a version.
    pub fn new(root: SpecNode) -> Self {
        Self {
            version: None,
            root,
        }
    }

    /// Strictly parse a document.
    pub fn from_value(value: &Value) -> Result<Self, SpecError> {
        let root = SpecNode::from_value(value)?;
        let version = value.get(VERSION_KEY).cloned();
        Ok(Self { version, root })
    }

    /// Parse JSON text, then the document.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value)?)
    }

    /// Warning for an unknown document version, if any.
    pub fn version_warning(&self) -> Option<SpecWarning> {
        check_version(self.version.as_ref())
    }

    pub fn to_value(&self) -> Value {
        let mut value = self.root.to_value();
        if let (Some(version), Value::Object(object)) = (&self.version, &mut value) {
            object.insert(VERSION_KEY.to_owned(), version.clone());
        }
        value
    }
}

impl serde::Serialize for SpecDocument {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SpecDocument {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Failure to load a document from text.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Spec(#[from] SpecError),
}
