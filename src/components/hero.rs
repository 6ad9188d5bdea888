//! Hero and PageSection: page-level blocks with a structured heading.

use std::any::Any;

use serde_json::{Map, Value};

use crate::component::{Component, Props};
use crate::registry::FactoryError;

keyword_enum! {
    /// Horizontal alignment of hero content.
    pub enum Align {
        Left => "left",
        #[default]
        Center => "center",
        Right => "right",
    }
}

pub(crate) const HERO_PROPS: &[&str] = &["className", "id", "style", "heading", "align"];
pub(crate) const PAGE_SECTION_PROPS: &[&str] = &["className", "id", "style", "heading"];

/// The `heading: { title, subtitle }` structured property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: Option<String>,
}

impl SectionHeading {
    /// Read the optional `heading` property. A heading object must carry a
    /// string `title`.
    pub fn from_props(props: &Props) -> Result<Option<Self>, FactoryError> {
        props.object("heading")?.map(Self::from_object).transpose()
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, FactoryError> {
        let title = match object.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(other) => {
                return Err(FactoryError::invalid(
                    "heading.title",
                    "string",
                    crate::spec::error::json_kind(other),
                ))
            }
            None => return Err(FactoryError::MissingProp("heading.title".into())),
        };
        let subtitle = match object.get("subtitle") {
            None | Some(Value::Null) => None,
            Some(Value::String(subtitle)) => Some(subtitle.clone()),
            Some(other) => {
                return Err(FactoryError::invalid(
                    "heading.subtitle",
                    "string",
                    crate::spec::error::json_kind(other),
                ))
            }
        };
        Ok(Self { title, subtitle })
    }

    fn push_attributes(&self, attrs: &mut Vec<(String, String)>) {
        attrs.push(("data-title".into(), self.title.clone()));
        if let Some(subtitle) = &self.subtitle {
            attrs.push(("data-subtitle".into(), subtitle.clone()));
        }
    }
}

/// A large introductory banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hero {
    pub heading: Option<SectionHeading>,
    pub align: Align,
}

impl Hero {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            heading: SectionHeading::from_props(props)?,
            align: props.parse_enum("align", Align::Center)?,
        })
    }
}

impl Component for Hero {
    fn component_type(&self) -> &str {
        "Hero"
    }

    fn element(&self) -> &str {
        "section"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::new();
        if let Some(heading) = &self.heading {
            heading.push_attributes(&mut attrs);
        }
        attrs.push(("data-align".into(), self.align.to_string()));
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A titled section of a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSection {
    pub heading: Option<SectionHeading>,
}

impl PageSection {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            heading: SectionHeading::from_props(props)?,
        })
    }
}

impl Component for PageSection {
    fn component_type(&self) -> &str {
        "PageSection"
    }

    fn element(&self) -> &str {
        "section"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::new();
        if let Some(heading) = &self.heading {
            heading.push_attributes(&mut attrs);
        }
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
