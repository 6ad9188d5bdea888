//! Render input: typed nodes or raw JSON, expanded one node at a time.
//!
//! Raw values are parsed lazily as the renderer reaches them, so a malformed
//! node only takes down its own subtree.

use std::borrow::Cow;

use serde_json::Value;

use crate::spec::{
    parse_shallow, Children, Properties, RawChildren, SpecError, SpecErrorKind, SpecNode, SpecPath,
    SpecWarning,
};

/// One node waiting to be rendered.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Source<'a> {
    Typed(&'a SpecNode),
    Raw(&'a Value),
}

#[derive(Debug)]
pub(crate) enum ExpandedChildren<'a> {
    Absent,
    Text(Cow<'a, str>),
    Single(Source<'a>),
    /// Child sources with their index in the declared sequence.
    Many(Vec<(usize, Source<'a>)>),
}

/// A node with its own fields checked and its children still unexpanded.
#[derive(Debug)]
pub(crate) struct Expanded<'a> {
    pub kind: &'a str,
    pub properties: Cow<'a, Properties>,
    pub children: ExpandedChildren<'a>,
    pub warnings: Vec<SpecWarning>,
}

impl<'a> Source<'a> {
    /// The declared type name, if readable, even when the node is malformed.
    pub fn declared_type(self) -> Option<&'a str> {
        let kind = match self {
            Self::Typed(node) => node.kind.as_str(),
            Self::Raw(value) => value.get("type")?.as_str()?,
        };
        (!kind.trim().is_empty()).then_some(kind)
    }

    pub fn expand(self, path: &SpecPath) -> Result<Expanded<'a>, SpecError> {
        match self {
            Self::Typed(node) => expand_typed(node, path),
            Self::Raw(value) => expand_raw(value, path),
        }
    }
}

fn expand_typed<'a>(node: &'a SpecNode, path: &SpecPath) -> Result<Expanded<'a>, SpecError> {
    if node.kind.trim().is_empty() {
        return Err(SpecError::new(SpecErrorKind::EmptyType, path.clone()));
    }
    let children = match &node.children {
        Children::Absent => ExpandedChildren::Absent,
        Children::Text(text) => ExpandedChildren::Text(Cow::Borrowed(text.as_str())),
        Children::Single(child) => ExpandedChildren::Single(Source::Typed(child)),
        Children::Many(nodes) => {
            ExpandedChildren::Many(nodes.iter().map(Source::Typed).enumerate().collect())
        }
    };
    Ok(Expanded {
        kind: &node.kind,
        properties: Cow::Borrowed(&node.properties),
        children,
        warnings: Vec::new(),
    })
}

fn expand_raw<'a>(value: &'a Value, path: &SpecPath) -> Result<Expanded<'a>, SpecError> {
    let raw = parse_shallow(value, path)?;
    let children = match raw.children {
        RawChildren::Absent => ExpandedChildren::Absent,
        RawChildren::Text(text) => ExpandedChildren::Text(text),
        RawChildren::Single(child) => ExpandedChildren::Single(Source::Raw(child)),
        RawChildren::Many(items) => ExpandedChildren::Many(
            items
                .into_iter()
                .map(|(index, child)| (index, Source::Raw(child)))
                .collect(),
        ),
    };
    Ok(Expanded {
        kind: raw.kind,
        properties: Cow::Owned(raw.properties),
        children,
        warnings: raw.warnings,
    })
}
