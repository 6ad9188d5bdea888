//! Typed specification nodes.

use indexmap::IndexMap;
use serde_json::Value;

use super::error::SpecError;
use super::parse::{self, RawChildren};
use super::path::SpecPath;

/// Declared properties of a node, in declaration order.
pub type Properties = IndexMap<String, Value>;

/// The children of a specification node.
///
/// `Absent` and an empty `Many` are different values: the first means the
/// node declares no children at all, the second an explicitly empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    #[default]
    Absent,
    Text(String),
    Single(Box<SpecNode>),
    Many(Vec<SpecNode>),
}

impl Children {
    /// Number of structured children, or `None` when absent.
    ///
    /// Literal text counts as zero structured children.
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Absent => None,
            Self::Text(_) => Some(0),
            Self::Single(_) => Some(1),
            Self::Many(nodes) => Some(nodes.len()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    fn to_value(&self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(Value::String(text.clone())),
            Self::Single(node) => Some(node.to_value()),
            Self::Many(nodes) => Some(Value::Array(nodes.iter().map(SpecNode::to_value).collect())),
        }
    }
}

/// One node of a UI specification tree.
///
/// A node is immutable once handed to a renderer; re-rendering with a new
/// specification produces a new tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecNode {
    /// Registered component type name (the JSON `type` field).
    pub kind: String,
    pub properties: Properties,
    pub children: Children,
}

impl SpecNode {
    /// Create a node with no properties and absent children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Properties::new(),
            children: Children::Absent,
        }
    }

    /// Set a property (builder). Later values replace earlier ones.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set literal text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Children::Text(text.into());
        self
    }

    /// Set a single child node (builder).
    pub fn with_child(mut self, child: SpecNode) -> Self {
        self.children = Children::Single(Box::new(child));
        self
    }

    /// Set an ordered list of children (builder). An empty iterator yields an
    /// explicitly empty list, not absent children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = SpecNode>) -> Self {
        self.children = Children::Many(children.into_iter().collect());
        self
    }

    /// Look up a declared property.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// See [`Children::count`].
    pub fn child_count(&self) -> Option<usize> {
        self.children.count()
    }

    /// Strictly parse a node and its whole subtree.
    ///
    /// Returns the first error found, located by path. Warnings are dropped;
    /// use [`validate`](super::validate) to collect them.
    pub fn from_value(value: &Value) -> Result<Self, SpecError> {
        Self::from_value_at(value, &SpecPath::root())
    }

    pub(crate) fn from_value_at(value: &Value, path: &SpecPath) -> Result<Self, SpecError> {
        let raw = parse::parse_shallow(value, path)?;
        let children = match raw.children {
            RawChildren::Absent => Children::Absent,
            RawChildren::Text(text) => Children::Text(text.into_owned()),
            RawChildren::Single(child) => {
                Children::Single(Box::new(Self::from_value_at(child, &path.child())?))
            }
            RawChildren::Many(items) => Children::Many(
                items
                    .into_iter()
                    .map(|(index, child)| Self::from_value_at(child, &path.child_at(index)))
                    .collect::<Result<_, _>>()?,
            ),
        };
        Ok(Self {
            kind: raw.kind.to_owned(),
            properties: raw.properties,
            children,
        })
    }

    /// Convert back into the canonical JSON shape: `type`, inline properties,
    /// then `children`. Properties whose names collide with node keys go into
    /// a nested `properties` object.
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("type".to_owned(), Value::String(self.kind.clone()));
        let mut nested = serde_json::Map::new();
        for (name, value) in &self.properties {
            if matches!(name.as_str(), "type" | "children" | "properties" | "version") {
                nested.insert(name.clone(), value.clone());
            } else {
                object.insert(name.clone(), value.clone());
            }
        }
        if !nested.is_empty() {
            object.insert("properties".to_owned(), Value::Object(nested));
        }
        if let Some(children) = self.children.to_value() {
            object.insert("children".to_owned(), children);
        }
        Value::Object(object)
    }
}

impl serde::Serialize for SpecNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SpecNode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::error::SpecErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn new_defaults() {
        let node = SpecNode::new("Alert");
        assert_eq!(node.kind, "Alert");
        assert!(node.properties.is_empty());
        assert!(node.children.is_absent());
        assert_eq!(node.child_count(), None);
    }

    #[test]
    fn builders() {
        let node = SpecNode::new("Alert")
            .with_prop("variant", "destructive")
            .with_children([SpecNode::new("AlertTitle").with_text("Error")]);
        assert_eq!(node.prop("variant"), Some(&json!("destructive")));
        assert_eq!(node.child_count(), Some(1));
    }

    #[test]
    fn empty_children_differs_from_absent() {
        let empty = SpecNode::new("Stack").with_children([]);
        let absent = SpecNode::new("Stack");
        assert_eq!(empty.child_count(), Some(0));
        assert_eq!(absent.child_count(), None);
        assert_ne!(empty, absent);
    }

    #[test]
    fn from_value_alert_scenario() {
        let value = json!({
            "type": "Alert",
            "variant": "destructive",
            "children": [
                { "type": "AlertTitle", "children": "Error" },
                { "type": "AlertDescription", "children": "Session expired." }
            ]
        });
        let node = SpecNode::from_value(&value).unwrap();
        let expected = SpecNode::new("Alert")
            .with_prop("variant", "destructive")
            .with_children([
                SpecNode::new("AlertTitle").with_text("Error"),
                SpecNode::new("AlertDescription").with_text("Session expired."),
            ]);
        assert_eq!(node, expected);
    }

    #[test]
    fn from_value_single_child_is_not_wrapped() {
        let value = json!({ "type": "Card", "children": { "type": "CardContent" } });
        let node = SpecNode::from_value(&value).unwrap();
        match node.children {
            Children::Single(child) => assert_eq!(child.kind, "CardContent"),
            other => panic!("expected single child, got {other:?}"),
        }
    }

    #[test]
    fn from_value_reports_nested_error_path() {
        let value = json!({
            "type": "Stack",
            "children": [ { "type": "Text" }, { "children": "no type" } ]
        });
        let err = SpecNode::from_value(&value).unwrap_err();
        assert_eq!(err.kind, SpecErrorKind::MissingType);
        assert_eq!(err.path.to_strings(), vec!["root", "children", "1"]);
    }

    #[test]
    fn to_value_round_trips_shape() {
        let value = json!({
            "type": "Hero",
            "heading": { "title": "Hi", "subtitle": "There" },
            "children": []
        });
        let node = SpecNode::from_value(&value).unwrap();
        assert_eq!(node.to_value(), value);
    }

    #[test]
    fn to_value_nests_reserved_property_names() {
        let node = SpecNode::new("Button")
            .with_prop("type", "submit")
            .with_prop("variant", "outline")
            .with_text("Send");
        let value = node.to_value();
        assert_eq!(
            value,
            json!({
                "type": "Button",
                "variant": "outline",
                "properties": { "type": "submit" },
                "children": "Send"
            })
        );
        let reparsed = SpecNode::from_value(&value).unwrap();
        assert_eq!(reparsed.prop("type"), Some(&json!("submit")));
        assert_eq!(reparsed.kind, "Button");
    }

    #[test]
    fn deserialize_goes_through_parser() {
        let err = serde_json::from_str::<SpecNode>(r#"{ "type": "" }"#).unwrap_err();
        assert!(err.to_string().contains("`type` is empty"));

        let node: SpecNode = serde_json::from_str(r#"{ "type": "Badge", "children": "New" }"#).unwrap();
        assert_eq!(node.children, Children::Text("New".into()));
    }
}
