//! Text and Heading.

use std::any::Any;

use crate::component::{Component, Props};
use crate::registry::FactoryError;

keyword_enum! {
    /// Host element used for a run of [`Text`].
    pub enum TextTag {
        #[default]
        P => "p",
        Span => "span",
        Small => "small",
        Strong => "strong",
        Em => "em",
    }
}

pub(crate) const TEXT_PROPS: &[&str] = &["className", "id", "style", "as"];
pub(crate) const HEADING_PROPS: &[&str] = &["className", "id", "style", "level"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A run of body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Text {
    pub tag: TextTag,
}

impl Text {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            tag: props.parse_enum("as", TextTag::P)?,
        })
    }
}

impl Component for Text {
    fn component_type(&self) -> &str {
        "Text"
    }

    fn element(&self) -> &str {
        self.tag.as_str()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A section heading, `h1` through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    level: u8,
}

impl Heading {
    /// Create a heading. Returns `None` unless `level` is in `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self { level })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        let level = props.u64("level")?.unwrap_or(2);
        u8::try_from(level)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| FactoryError::invalid("level", "1..=6", level.to_string()))
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self { level: 2 }
    }
}

impl Component for Heading {
    fn component_type(&self) -> &str {
        "Heading"
    }

    fn element(&self) -> &str {
        HEADING_TAGS[usize::from(self.level - 1)]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
