//! # jedi-spec
//!
//! Server-driven UI core: turn a JSON component specification into a tree of
//! typed, mounted components.
//!
//! A backend describes a screen as nested `{ "type": ..., "children": ... }`
//! objects. jedi-spec validates that description, looks each type up in a
//! [`registry`], binds action names to host [`action`] handlers and builds the
//! output [`tree`]. Broken nodes become visible placeholders; the rest of the
//! tree renders normally.
//!
//! ## Core Systems
//!
//! - **[`spec`]**: Specification model, paths, parsing and validation
//! - **[`registry`]**: Type name to factory mapping, plus the process-wide registry
//! - **[`component`]**: Component trait, props, placeholders
//! - **[`components`]**: Built-in components (Alert, Card, Hero, Stack, Button, ...)
//! - **[`action`]**: Handler table and action binding
//! - **[`tree`]**: Slotmap-backed output tree with queries
//! - **[`render`]**: The renderer, diagnostics, outline and markup serializers
//!
//! ## Example
//!
//! ```
//! use jedi_spec::action::HandlerTable;
//! use jedi_spec::spec::SpecNode;
//!
//! let spec = SpecNode::new("Alert")
//!     .with_prop("variant", "destructive")
//!     .with_children([SpecNode::new("AlertTitle").with_text("Error")]);
//!
//! let output = jedi_spec::render::render(&spec, &HandlerTable::new());
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.outline(), "Alert variant=\"destructive\"\n  AlertTitle \"Error\"\n");
//! ```

// Specification model
pub mod spec;

// Components and their registry
pub mod component;
pub mod components;
pub mod registry;

// Actions
pub mod action;

// Rendering
pub mod render;
pub mod tree;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use jedi_spec_macros::spec;
