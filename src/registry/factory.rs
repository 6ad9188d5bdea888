//! Factories: how a registry entry turns props and children into a component.

use crate::component::{Component, Props};
use crate::spec::SpecPath;
use crate::tree::ChildSlot;

/// Errors a factory reports instead of constructing a component.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactoryError {
    #[error("missing required property `{0}`")]
    MissingProp(String),
    #[error("invalid property `{name}`: expected {expected}, found {found}")]
    InvalidProp {
        name: String,
        expected: String,
        found: String,
    },
    #[error("invalid children: {0}")]
    InvalidChildren(String),
    #[error("{0}")]
    Custom(String),
}

impl FactoryError {
    pub fn invalid(name: &str, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidProp {
            name: name.to_owned(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Everything a factory sees for one node.
#[derive(Debug, Clone, Copy)]
pub struct FactoryContext<'a> {
    /// The type name the node was resolved under.
    pub kind: &'a str,
    /// Sanitized, bound properties.
    pub props: &'a Props,
    /// Already-rendered children.
    pub children: &'a ChildSlot,
    /// Location of the node in the specification.
    pub path: &'a SpecPath,
}

/// Constructor for one registered component type.
///
/// Implemented for any `Fn(&FactoryContext) -> Result<Box<dyn Component>, FactoryError>`,
/// so closures can be registered directly.
pub trait Factory: Send + Sync {
    fn create(&self, ctx: &FactoryContext<'_>) -> Result<Box<dyn Component>, FactoryError>;
}

impl<F> Factory for F
where
    F: Fn(&FactoryContext<'_>) -> Result<Box<dyn Component>, FactoryError> + Send + Sync,
{
    fn create(&self, ctx: &FactoryContext<'_>) -> Result<Box<dyn Component>, FactoryError> {
        self(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Element;

    #[test]
    fn closures_are_factories() {
        let factory = |ctx: &FactoryContext<'_>| -> Result<Box<dyn Component>, FactoryError> {
            Ok(Box::new(Element::new(ctx.kind, "span")))
        };
        let props = Props::new();
        let ctx = FactoryContext {
            kind: "Chip",
            props: &props,
            children: &ChildSlot::Absent,
            path: &SpecPath::root(),
        };
        let component = factory.create(&ctx).unwrap();
        assert_eq!(component.component_type(), "Chip");
        assert_eq!(component.element(), "span");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FactoryError::MissingProp("content".into()).to_string(),
            "missing required property `content`"
        );
        assert_eq!(
            FactoryError::invalid("level", "1..=6", "9").to_string(),
            "invalid property `level`: expected 1..=6, found 9"
        );
    }
}
