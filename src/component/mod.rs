//! Component system: the Component trait, rendered props, placeholders.

pub mod placeholder;
pub mod props;
pub mod traits;

pub use placeholder::{Placeholder, PlaceholderReason};
pub use props::{PropValue, Props};
pub use traits::{Component, Element};
