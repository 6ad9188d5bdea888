//! Stack: lays children out in a row or column with a gap.

use std::any::Any;

use crate::component::{Component, Props};
use crate::registry::FactoryError;

keyword_enum! {
    /// Main axis of a [`Stack`].
    pub enum Direction {
        #[default]
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

pub(crate) const STACK_PROPS: &[&str] = &["className", "id", "style", "direction", "gap"];

/// Largest gap accepted, in spacing units.
const MAX_GAP: u64 = 64;

/// Flex container stacking its children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack {
    pub direction: Direction,
    /// Spacing between children, in theme spacing units.
    pub gap: u64,
}

impl Stack {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        let gap = props.u64("gap")?.unwrap_or(0);
        if gap > MAX_GAP {
            return Err(FactoryError::invalid("gap", format!("0..={MAX_GAP}"), gap.to_string()));
        }
        Ok(Self {
            direction: props.parse_enum("direction", Direction::Vertical)?,
            gap,
        })
    }
}

impl Component for Stack {
    fn component_type(&self) -> &str {
        "Stack"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        vec![
            ("data-direction".into(), self.direction.to_string()),
            ("data-gap".into(), self.gap.to_string()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
