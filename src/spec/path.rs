//! Node paths: where in a specification document a node lives.

use std::fmt;

/// A single step from a parent node to one of its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// The document root.
    Root,
    /// An object key (e.g. `children` for a single child node).
    Key(String),
    /// A position inside a children sequence.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Path from the document root to a node.
///
/// Paths are built by the parser and the renderer as they descend, so every
/// error and placeholder can point at the exact spot in the source document.
/// The root path is `["root"]`; the second child of the root is
/// `["root", "children", "1"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecPath {
    segments: Vec<PathSegment>,
}

impl SpecPath {
    /// The path of the document root.
    pub fn root() -> Self {
        Self {
            segments: vec![PathSegment::Root],
        }
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        matches!(self.segments.as_slice(), [PathSegment::Root])
    }

    /// Path of the single child stored under `children`.
    pub fn child(&self) -> Self {
        self.join(PathSegment::Key("children".to_owned()))
    }

    /// Path of the `index`-th entry of a children sequence.
    pub fn child_at(&self, index: usize) -> Self {
        self.child().join(PathSegment::Index(index))
    }

    /// Append an arbitrary segment.
    pub fn join(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }

    /// The raw segments, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Nesting depth in nodes. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::Key(_)))
            .count()
    }

    /// Segments rendered as strings, e.g. `["root", "children", "0"]`.
    pub fn to_strings(&self) -> Vec<String> {
        self.segments.iter().map(ToString::to_string).collect()
    }
}

impl Default for SpecPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for SpecPath {
    /// Dotted form: `root.children[1].children`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                other => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{other}")?;
                }
            }
        }
        Ok(())
    }
}

impl serde::Serialize for SpecPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_strings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path() {
        let path = SpecPath::root();
        assert!(path.is_root());
        assert_eq!(path.to_strings(), vec!["root"]);
        assert_eq!(path.to_string(), "root");
        assert_eq!(path.depth(), 0);
    }

    #[test]
    fn child_at_index() {
        let path = SpecPath::root().child_at(1);
        assert!(!path.is_root());
        assert_eq!(path.to_strings(), vec!["root", "children", "1"]);
        assert_eq!(path.to_string(), "root.children[1]");
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn single_child_then_index() {
        let path = SpecPath::root().child().child_at(0);
        assert_eq!(path.to_string(), "root.children.children[0]");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn join_does_not_mutate_parent() {
        let parent = SpecPath::root();
        let _child = parent.child_at(3);
        assert_eq!(parent.segments().len(), 1);
    }

    #[test]
    fn serializes_as_string_list() {
        let path = SpecPath::root().child_at(2);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!(["root", "children", "2"]));
    }
}
