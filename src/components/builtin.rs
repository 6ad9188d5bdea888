//! The closed set of built-in component types.
//!
//! [`Builtin`] is the typed side of the registry: each variant knows its type
//! name, its property allow-list and how to construct itself. Registries
//! created with [`Registry::with_builtins`](crate::registry::Registry::with_builtins)
//! hold one entry per variant; callers extend them with their own factories.

use crate::component::Component;
use crate::registry::{Factory, FactoryContext, FactoryError};

use super::alert::{Alert, AlertDescription, AlertTitle, ALERT_PART_PROPS, ALERT_PROPS};
use super::block_quote::{BlockQuote, BLOCK_QUOTE_PROPS};
use super::button::{Badge, Button, BADGE_PROPS, BUTTON_PROPS};
use super::card::{Card, CardPart, CardSlot, CARD_PROPS};
use super::hero::{Hero, PageSection, HERO_PROPS, PAGE_SECTION_PROPS};
use super::layout::{Stack, STACK_PROPS};
use super::overlay::{Popover, Tooltip, POPOVER_PROPS, TOOLTIP_PROPS};
use super::skeleton::{Skeleton, SKELETON_PROPS};
use super::typography::{Heading, Text, HEADING_PROPS, TEXT_PROPS};

/// A built-in component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Alert,
    AlertTitle,
    AlertDescription,
    Card,
    CardHeader,
    CardTitle,
    CardDescription,
    CardContent,
    CardFooter,
    BlockQuote,
    Hero,
    PageSection,
    Skeleton,
    Stack,
    Text,
    Heading,
    Button,
    Badge,
    Popover,
    Tooltip,
}

impl Builtin {
    pub const ALL: [Builtin; 20] = [
        Self::Alert,
        Self::AlertTitle,
        Self::AlertDescription,
        Self::Card,
        Self::CardHeader,
        Self::CardTitle,
        Self::CardDescription,
        Self::CardContent,
        Self::CardFooter,
        Self::BlockQuote,
        Self::Hero,
        Self::PageSection,
        Self::Skeleton,
        Self::Stack,
        Self::Text,
        Self::Heading,
        Self::Button,
        Self::Badge,
        Self::Popover,
        Self::Tooltip,
    ];

    /// The registered type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alert => "Alert",
            Self::AlertTitle => "AlertTitle",
            Self::AlertDescription => "AlertDescription",
            Self::Card => "Card",
            Self::CardHeader => "CardHeader",
            Self::CardTitle => "CardTitle",
            Self::CardDescription => "CardDescription",
            Self::CardContent => "CardContent",
            Self::CardFooter => "CardFooter",
            Self::BlockQuote => "BlockQuote",
            Self::Hero => "Hero",
            Self::PageSection => "PageSection",
            Self::Skeleton => "Skeleton",
            Self::Stack => "Stack",
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::Button => "Button",
            Self::Badge => "Badge",
            Self::Popover => "Popover",
            Self::Tooltip => "Tooltip",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Property allow-list used when sanitizing.
    pub fn accepted_props(self) -> &'static [&'static str] {
        match self {
            Self::Alert => ALERT_PROPS,
            Self::AlertTitle | Self::AlertDescription => ALERT_PART_PROPS,
            Self::Card
            | Self::CardHeader
            | Self::CardTitle
            | Self::CardDescription
            | Self::CardContent
            | Self::CardFooter => CARD_PROPS,
            Self::BlockQuote => BLOCK_QUOTE_PROPS,
            Self::Hero => HERO_PROPS,
            Self::PageSection => PAGE_SECTION_PROPS,
            Self::Skeleton => SKELETON_PROPS,
            Self::Stack => STACK_PROPS,
            Self::Text => TEXT_PROPS,
            Self::Heading => HEADING_PROPS,
            Self::Button => BUTTON_PROPS,
            Self::Badge => BADGE_PROPS,
            Self::Popover => POPOVER_PROPS,
            Self::Tooltip => TOOLTIP_PROPS,
        }
    }

    /// Construct the component for one node.
    pub fn create(self, ctx: &FactoryContext<'_>) -> Result<Box<dyn Component>, FactoryError> {
        let props = ctx.props;
        let component: Box<dyn Component> = match self {
            Self::Alert => Box::new(Alert::from_props(props)?),
            Self::AlertTitle => Box::new(AlertTitle),
            Self::AlertDescription => Box::new(AlertDescription),
            Self::Card => Box::new(Card),
            Self::CardHeader => Box::new(CardSlot::new(CardPart::Header)),
            Self::CardTitle => Box::new(CardSlot::new(CardPart::Title)),
            Self::CardDescription => Box::new(CardSlot::new(CardPart::Description)),
            Self::CardContent => Box::new(CardSlot::new(CardPart::Content)),
            Self::CardFooter => Box::new(CardSlot::new(CardPart::Footer)),
            Self::BlockQuote => Box::new(BlockQuote::from_props(props)?),
            Self::Hero => Box::new(Hero::from_props(props)?),
            Self::PageSection => Box::new(PageSection::from_props(props)?),
            Self::Skeleton => Box::new(Skeleton::from_props(props)?),
            Self::Stack => Box::new(Stack::from_props(props)?),
            Self::Text => Box::new(Text::from_props(props)?),
            Self::Heading => Box::new(Heading::from_props(props)?),
            Self::Button => Box::new(Button::from_props(props)?),
            Self::Badge => Box::new(Badge::from_props(props)?),
            Self::Popover => Box::new(Popover::from_parts(props, ctx.children)?),
            Self::Tooltip => Box::new(Tooltip::from_props(props)?),
        };
        Ok(component)
    }
}

impl Factory for Builtin {
    fn create(&self, ctx: &FactoryContext<'_>) -> Result<Box<dyn Component>, FactoryError> {
        Builtin::create(*self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Props;
    use crate::components::COMMON_PROPS;
    use crate::spec::SpecPath;
    use crate::tree::ChildSlot;
    use serde_json::json;

    fn create(builtin: Builtin, props: &Props) -> Result<Box<dyn Component>, FactoryError> {
        let ctx = FactoryContext {
            kind: builtin.name(),
            props,
            children: &ChildSlot::Absent,
            path: &SpecPath::root(),
        };
        builtin.create(&ctx)
    }

    #[test]
    fn names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("Frobnicator"), None);
    }

    #[test]
    fn every_builtin_accepts_common_props() {
        for builtin in Builtin::ALL {
            for prop in COMMON_PROPS {
                assert!(
                    builtin.accepted_props().contains(prop),
                    "{} does not accept {prop}",
                    builtin.name()
                );
            }
        }
    }

    #[test]
    fn component_type_matches_name() {
        let tooltip_props = Props::new().with("content", json!("hint"));
        let empty = Props::new();
        for builtin in Builtin::ALL {
            let props = if builtin == Builtin::Tooltip {
                &tooltip_props
            } else {
                &empty
            };
            let component = create(builtin, props).unwrap();
            assert_eq!(component.component_type(), builtin.name());
        }
    }

    #[test]
    fn factory_errors_surface() {
        let props = Props::new().with("variant", json!("neon"));
        assert!(create(Builtin::Alert, &props).is_err());
        assert!(create(Builtin::Tooltip, &Props::new()).is_err());
    }

    #[test]
    fn as_factory_trait_object() {
        let factory: &dyn Factory = &Builtin::Stack;
        let props = Props::new();
        let ctx = FactoryContext {
            kind: "Stack",
            props: &props,
            children: &ChildSlot::Many(Vec::new()),
            path: &SpecPath::root(),
        };
        assert_eq!(factory.create(&ctx).unwrap().component_type(), "Stack");
    }
}
