//! Alert, AlertTitle, AlertDescription: a callout for user attention.

use std::any::Any;

use crate::component::{Component, Props};
use crate::registry::FactoryError;

keyword_enum! {
    /// Visual variant of an [`Alert`].
    pub enum AlertVariant {
        #[default]
        Default => "default",
        Destructive => "destructive",
    }
}

pub(crate) const ALERT_PROPS: &[&str] = &["className", "id", "style", "variant"];
pub(crate) const ALERT_PART_PROPS: &[&str] = &["className", "id", "style"];

/// A callout box, announced to assistive technology as an alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alert {
    pub variant: AlertVariant,
}

impl Alert {
    pub fn new(variant: AlertVariant) -> Self {
        Self { variant }
    }

    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self::new(props.parse_enum("variant", AlertVariant::Default)?))
    }
}

impl Component for Alert {
    fn component_type(&self) -> &str {
        "Alert"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        vec![
            ("role".into(), "alert".into()),
            ("data-variant".into(), self.variant.to_string()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Title line of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertTitle;

impl Component for AlertTitle {
    fn component_type(&self) -> &str {
        "AlertTitle"
    }

    fn element(&self) -> &str {
        "h5"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Body text of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertDescription;

impl Component for AlertDescription {
    fn component_type(&self) -> &str {
        "AlertDescription"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
