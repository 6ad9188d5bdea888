//! Built-in components: Alert, Card, BlockQuote, Hero, PageSection, Skeleton,
//! Stack, Text, Heading, Button, Badge, Popover, Tooltip.

/// Define a string-keyed enum with `as_str`, `FromStr` and `Display`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, ()> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod alert;
pub mod block_quote;
pub mod builtin;
pub mod button;
pub mod card;
pub mod hero;
pub mod layout;
pub mod overlay;
pub mod skeleton;
pub mod typography;

pub use alert::{Alert, AlertDescription, AlertTitle, AlertVariant};
pub use block_quote::BlockQuote;
pub use builtin::Builtin;
pub use button::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardPart, CardSlot};
pub use hero::{Align, Hero, PageSection, SectionHeading};
pub use layout::{Direction, Stack};
pub use overlay::{Popover, Side, Tooltip};
pub use skeleton::{Dimension, Skeleton};
pub use typography::{Heading, Text, TextTag};

/// Properties every built-in accepts and forwards to the host untouched.
pub const COMMON_PROPS: &[&str] = &["className", "id", "style"];
