//! Button and Badge.
//!
//! Button is the main action surface: its `onClick` property is bound to a
//! handler from the host's handler table.

use std::any::Any;

use serde_json::Value;

use crate::action::Handler;
use crate::component::{Component, Props};
use crate::registry::FactoryError;

keyword_enum! {
    /// Visual variant of a [`Button`].
    pub enum ButtonVariant {
        #[default]
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
}

keyword_enum! {
    /// Size of a [`Button`].
    pub enum ButtonSize {
        #[default]
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
    }
}

keyword_enum! {
    /// Visual variant of a [`Badge`].
    pub enum BadgeVariant {
        #[default]
        Default => "default",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
    }
}

pub(crate) const BUTTON_PROPS: &[&str] = &[
    "className", "id", "style", "variant", "size", "disabled", "type", "onClick",
];
pub(crate) const BADGE_PROPS: &[&str] = &["className", "id", "style", "variant"];

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    /// Host `type` attribute: `button`, `submit` or `reset`.
    pub button_type: String,
    on_click: Option<Handler>,
}

impl Button {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        let button_type = props.str("type")?.unwrap_or("button");
        if !matches!(button_type, "button" | "submit" | "reset") {
            return Err(FactoryError::invalid("type", "button, submit or reset", button_type));
        }
        Ok(Self {
            variant: props.parse_enum("variant", ButtonVariant::Default)?,
            size: props.parse_enum("size", ButtonSize::Default)?,
            disabled: props.bool("disabled")?.unwrap_or(false),
            button_type: button_type.to_owned(),
            on_click: props.handler("onClick")?.cloned(),
        })
    }

    /// The bound click handler, if one was declared.
    pub fn on_click(&self) -> Option<&Handler> {
        self.on_click.as_ref()
    }

    /// Fire `onClick`. Does nothing when disabled or when no handler was
    /// declared. Returns whether a handler was invoked.
    pub fn click(&self) -> bool {
        match (&self.on_click, self.disabled) {
            (Some(handler), false) => {
                handler.invoke(Value::Null);
                true
            }
            _ => false,
        }
    }
}

impl Component for Button {
    fn component_type(&self) -> &str {
        "Button"
    }

    fn element(&self) -> &str {
        "button"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![
            ("type".into(), self.button_type.clone()),
            ("data-variant".into(), self.variant.to_string()),
            ("data-size".into(), self.size.to_string()),
        ];
        if self.disabled {
            attrs.push(("disabled".into(), String::new()));
        }
        if let Some(handler) = &self.on_click {
            attrs.push(("data-action".into(), handler.name().to_owned()));
        }
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// A small status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Badge {
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            variant: props.parse_enum("variant", BadgeVariant::Default)?,
        })
    }
}

impl Component for Badge {
    fn component_type(&self) -> &str {
        "Badge"
    }

    fn element(&self) -> &str {
        "span"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        vec![("data-variant".into(), self.variant.to_string())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
