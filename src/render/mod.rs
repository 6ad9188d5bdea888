//! Rendering: resolve a specification against a registry into a component
//! tree, plus text serializers for the result.

pub mod config;
pub mod diagnostic;
pub mod markup;
pub mod outline;
pub mod renderer;
mod source;

pub use config::RenderConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use markup::markup;
pub use outline::outline;
pub use renderer::{render, RenderOutput, Renderer};
