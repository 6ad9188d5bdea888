//! Component registry: resolves specification type names to factories.

pub mod factory;
#[allow(clippy::module_inception)]
pub mod registry;

pub use factory::{Factory, FactoryContext, FactoryError};
pub use registry::{global, install, Registry, RegistryEntry, RegistryError};
