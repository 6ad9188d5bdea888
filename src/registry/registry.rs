//! Component registry: type name → factory, plus the process-wide instance.
//!
//! A [`Registry`] is populated during application setup and read-only while
//! rendering. Renderers only borrow it shared, so registering a type while a
//! render pass is in flight does not compile.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::factory::Factory;
use crate::component::Element;
use crate::components::Builtin;

/// Errors from registry setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid component type name {0:?}")]
    InvalidName(String),
    #[error("a global registry is already installed")]
    AlreadyInstalled,
}

/// One registered component type.
#[derive(Clone)]
pub struct RegistryEntry {
    factory: Arc<dyn Factory>,
    accepted: Option<BTreeSet<String>>,
}

impl RegistryEntry {
    pub fn new(factory: Arc<dyn Factory>, accepted: Option<BTreeSet<String>>) -> Self {
        Self { factory, accepted }
    }

    pub fn factory(&self) -> &dyn Factory {
        self.factory.as_ref()
    }

    /// The property allow-list, if the entry declares one.
    pub fn accepted(&self) -> Option<&BTreeSet<String>> {
        self.accepted.as_ref()
    }

    /// Whether a property survives sanitizing. Entries without an allow-list
    /// accept everything.
    pub fn accepts(&self, prop: &str) -> bool {
        self.accepted
            .as_ref()
            .map_or(true, |accepted| accepted.contains(prop))
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("accepted", &self.accepted)
            .finish_non_exhaustive()
    }
}

/// Mapping from component type name to factory.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, RegistryEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in component.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in Builtin::ALL {
            registry.entries.insert(
                builtin.name().to_owned(),
                RegistryEntry::new(Arc::new(builtin), Some(to_set(builtin.accepted_props()))),
            );
        }
        registry
    }

    /// Register a component type.
    ///
    /// If the name is already registered the entry is replaced and the
    /// previous one returned. `accepted` is the property allow-list used for
    /// sanitizing; `None` forwards every property.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Factory + 'static,
        accepted: Option<&[&str]>,
    ) -> Result<Option<RegistryEntry>, RegistryError> {
        let name = name.into();
        if name.is_empty() || name.trim() != name {
            return Err(RegistryError::InvalidName(name));
        }
        let entry = RegistryEntry::new(Arc::new(factory), accepted.map(to_set));
        debug!(component = %name, "registering component type");
        Ok(self.entries.insert(name, entry))
    }

    /// Register a type rendered as a plain host element with forwarded props.
    pub fn register_element(
        &mut self,
        name: impl Into<String>,
        tag: impl Into<String>,
        accepted: Option<&[&str]>,
    ) -> Result<Option<RegistryEntry>, RegistryError> {
        let name = name.into();
        let element = Element::new(name.clone(), tag);
        self.register(
            name,
            move |_: &super::FactoryContext<'_>| -> Result<Box<dyn crate::component::Component>, super::FactoryError> {
                Ok(Box::new(element.clone()))
            },
            accepted,
        )
    }

    /// Remove a type. Returns the removed entry.
    pub fn unregister(&mut self, name: &str) -> Option<RegistryEntry> {
        self.entries.remove(name)
    }

    /// Look up a type. `None` means not registered.
    pub fn resolve(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.names())
            .finish()
    }
}

fn to_set(props: &[&str]) -> BTreeSet<String> {
    props.iter().map(|p| (*p).to_owned()).collect()
}

// ---------------------------------------------------------------------------
// Process-wide registry
// ---------------------------------------------------------------------------

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Install the process-wide registry. Call once during setup, before any
/// rendering; a second call fails.
pub fn install(registry: Registry) -> Result<(), RegistryError> {
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)
}

/// The process-wide registry. Falls back to the built-ins if nothing was
/// installed; after the first call the registry can no longer be replaced.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::with_builtins)
}
