//! Component trait and the generic passthrough element.
//!
//! A [`Component`] is what a registry factory constructs for one node. It
//! carries the typed, validated view of the node's properties; the host uses
//! `element` and `attributes` to mount it.

use std::any::Any;
use std::fmt::Debug;

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every component instance.
///
/// Component is object-safe; instances are stored as `Box<dyn Component>` in
/// the output tree. Instances are immutable once constructed.
pub trait Component: Debug + Send + Sync {
    /// The registered type name (e.g. "Alert", "Stack").
    fn component_type(&self) -> &str;

    /// The host element this component mounts as. Defaults to `div`.
    fn element(&self) -> &str {
        "div"
    }

    /// Host attributes derived from the component's typed state, in a stable
    /// order. Pass-through props such as `className` are added by the host
    /// serializer, not here.
    fn attributes(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A component with no typed state: just a type name and a host tag.
///
/// Used for caller-registered types that only need props forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    component_type: String,
    tag: String,
}

impl Element {
    pub fn new(component_type: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            tag: tag.into(),
        }
    }
}

impl Component for Element {
    fn component_type(&self) -> &str {
        &self.component_type
    }

    fn element(&self) -> &str {
        &self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
