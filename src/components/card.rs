//! Card and its structural parts: header, title, description, content, footer.

use std::any::Any;

use crate::component::Component;

pub(crate) const CARD_PROPS: &[&str] = &["className", "id", "style"];

/// A bordered content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Card;

impl Component for Card {
    fn component_type(&self) -> &str {
        "Card"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Which part of a card a [`CardSlot`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPart {
    Header,
    Title,
    Description,
    Content,
    Footer,
}

impl CardPart {
    pub fn component_type(self) -> &'static str {
        match self {
            Self::Header => "CardHeader",
            Self::Title => "CardTitle",
            Self::Description => "CardDescription",
            Self::Content => "CardContent",
            Self::Footer => "CardFooter",
        }
    }

    fn element(self) -> &'static str {
        match self {
            Self::Title => "h3",
            Self::Description => "p",
            Self::Header | Self::Content | Self::Footer => "div",
        }
    }
}

/// One structural part of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub part: CardPart,
}

impl CardSlot {
    pub fn new(part: CardPart) -> Self {
        Self { part }
    }
}

impl Component for CardSlot {
    fn component_type(&self) -> &str {
        self.part.component_type()
    }

    fn element(&self) -> &str {
        self.part.element()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
