//! BlockQuote: a quotation with an optional source.

use std::any::Any;

use crate::component::{Component, Props};
use crate::registry::FactoryError;

pub(crate) const BLOCK_QUOTE_PROPS: &[&str] = &["className", "id", "style", "cite", "author"];

/// A block quotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockQuote {
    /// URL of the quoted source.
    pub cite: Option<String>,
    /// Attribution line.
    pub author: Option<String>,
}

impl BlockQuote {
    pub fn from_props(props: &Props) -> Result<Self, FactoryError> {
        Ok(Self {
            cite: props.str("cite")?.map(str::to_owned),
            author: props.str("author")?.map(str::to_owned),
        })
    }
}

impl Component for BlockQuote {
    fn component_type(&self) -> &str {
        "BlockQuote"
    }

    fn element(&self) -> &str {
        "blockquote"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::new();
        if let Some(cite) = &self.cite {
            attrs.push(("cite".into(), cite.clone()));
        }
        if let Some(author) = &self.author {
            attrs.push(("data-author".into(), author.clone()));
        }
        attrs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_quote() {
        let quote = BlockQuote::from_props(&Props::new()).unwrap();
        assert_eq!(quote, BlockQuote::default());
        assert_eq!(quote.element(), "blockquote");
        assert!(quote.attributes().is_empty());
    }

    #[test]
    fn cite_and_author() {
        let props = Props::new()
            .with("cite", json!("https://example.com/talk"))
            .with("author", json!("Ada"));
        let quote = BlockQuote::from_props(&props).unwrap();
        assert_eq!(
            quote.attributes(),
            vec![
                ("cite".to_string(), "https://example.com/talk".to_string()),
                ("data-author".to_string(), "Ada".to_string()),
            ]
        );
    }

    #[test]
    fn non_string_cite_is_error() {
        let props = Props::new().with("cite", json!(42));
        assert!(BlockQuote::from_props(&props).is_err());
    }
}
