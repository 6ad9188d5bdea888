//! Renderer configuration.

use serde::Deserialize;

use crate::spec::DEFAULT_MAX_DEPTH;

/// Configuration for a [`Renderer`](super::Renderer).
///
/// Can be built in code or deserialized; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Drop properties not on a component's allow-list before forwarding.
    pub sanitize_props: bool,
    /// Replace action names with handlers from the handler table.
    pub bind_actions: bool,
    /// Deepest nesting rendered; deeper nodes become placeholders.
    pub max_depth: usize,
    /// Log unresolved handler references at `warn` rather than `debug`.
    pub warn_unresolved_handlers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sanitize_props: true,
            bind_actions: true,
            max_depth: DEFAULT_MAX_DEPTH,
            warn_unresolved_handlers: true,
        }
    }
}

impl RenderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable prop sanitizing (builder).
    pub fn with_sanitize_props(mut self, sanitize: bool) -> Self {
        self.sanitize_props = sanitize;
        self
    }

    /// Enable or disable handler binding (builder).
    pub fn with_bind_actions(mut self, bind: bool) -> Self {
        self.bind_actions = bind;
        self
    }

    /// Set the nesting limit (builder).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose the log level for unresolved handlers (builder).
    pub fn with_warn_unresolved_handlers(mut self, warn: bool) -> Self {
        self.warn_unresolved_handlers = warn;
        self
    }
}
