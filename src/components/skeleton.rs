//! Skeleton: a loading placeholder block.

use std::any::Any;
use std::fmt;

use serde_json::Value;

use crate::component::{Component, PropValue, Props};
use crate::registry::FactoryError;

pub(crate) const SKELETON_PROPS: &[&str] = &["className", "id", "style", "width", "height", "rounded"];

/// A size given either in pixels or as a verbatim CSS length.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl Dimension {
    fn from_prop(props: &Props, name: &str) -> Result<Option<Self>, FactoryError> {
        match props.get(name) {
            None | Some(PropValue::Value(Value::Null)) => Ok(None),
            Some(PropValue::Value(Value::Number(n))) => match n.as_f64() {
                Some(px) if px >= 0.0 => Ok(Some(Self::Px(px))),
                _ => Err(FactoryError::invalid(name, "non-negative length", n.to_string())),
            },
            Some(PropValue::Value(Value::String(css))) if !css.trim().is_empty() => {
                Ok(Some(Self::Css(css.clone())))
            }
            Some(_) => Err(FactoryError::invalid(name, "number or CSS length", "other")),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(css) => f.write_str(css),
        }
    }
}

/// A pulsing block shown while content loads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skeleton {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub rounded: bool,
}

impl Skeleton {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            width: Dimension::from_prop(props, "width")?,
            height: Dimension::from_prop(props, "height")?,
            rounded: props.bool("rounded")?.unwrap_or(false),
        })
    }
}

impl Component for Skeleton {
    fn component_type(&self) -> &str {
        "Skeleton"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![("aria-busy".into(), "true".into())];
        if let Some(width) = &self.width {
            attrs.push(("data-width".into(), width.to_string()));
        }
        if let Some(height) = &self.height {
            attrs.push(("data-height".into(), height.to_string()));
        }
        if self.rounded {
            attrs.push(("data-rounded".into(), "true".into()));
        }
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
