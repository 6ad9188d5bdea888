//! Popover and Tooltip: floating content anchored to a trigger.

use std::any::Any;

use serde_json::Value;

use crate::action::Handler;
use crate::component::{Component, Props};
use crate::registry::FactoryError;
use crate::tree::ChildSlot;

keyword_enum! {
    /// Which side of the trigger a tooltip opens on.
    pub enum Side {
        #[default]
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
    }
}

pub(crate) const POPOVER_PROPS: &[&str] = &["className", "id", "style", "open", "onOpenChange"];
pub(crate) const TOOLTIP_PROPS: &[&str] = &["className", "id", "style", "content", "side", "delay"];

// ---------------------------------------------------------------------------
// Popover
// ---------------------------------------------------------------------------

/// A popover. Its children are the trigger and the floating content, so
/// literal text is rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Popover {
    pub open: bool,
    on_open_change: Option<Handler>,
}

impl Popover {
    pub fn from_parts(props: &Props, children: &ChildSlot) -> Result<Self, FactoryError> {
        if children.text().is_some() {
            return Err(FactoryError::InvalidChildren(
                "Popover expects a trigger and content nodes, not text".into(),
            ));
        }
        Ok(Self {
            open: props.bool("open")?.unwrap_or(false),
            on_open_change: props.handler("onOpenChange")?.cloned(),
        })
    }

    /// Ask the host to change the open state. The state itself is owned by
    /// the host; this only reports the request through `onOpenChange`.
    pub fn request_open(&self, open: bool) -> bool {
        match &self.on_open_change {
            Some(handler) => {
                handler.invoke(Value::Bool(open));
                true
            }
            None => false,
        }
    }
}

impl Component for Popover {
    fn component_type(&self) -> &str {
        "Popover"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        vec![(
            "data-state".into(),
            if self.open { "open" } else { "closed" }.into(),
        )]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Tooltip
// ---------------------------------------------------------------------------

/// Hover hint. Requires `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub content: String,
    pub side: Side,
    /// Open delay in milliseconds.
    pub delay_ms: u64,
}

impl Tooltip {
    const DEFAULT_DELAY_MS: u64 = 700;

    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            content: props.required_str("content")?.to_owned(),
            side: props.parse_enum("side", Side::Top)?,
            delay_ms: props.u64("delay")?.unwrap_or(Self::DEFAULT_DELAY_MS),
        })
    }
}

impl Component for Tooltip {
    fn component_type(&self) -> &str {
        "Tooltip"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        vec![
            ("title".into(), self.content.clone()),
            ("data-side".into(), self.side.to_string()),
            ("data-delay".into(), self.delay_ms.to_string()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
