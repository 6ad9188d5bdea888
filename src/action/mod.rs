//! Action binding: named handler references in specifications, resolved to
//! callables supplied by the host at render time.

pub mod binding;
pub mod handler;
pub mod table;

pub use binding::{bind, is_action_key, passthrough, Binding, UnresolvedReference};
pub use handler::{ActionEvent, Handler};
pub use table::HandlerTable;
