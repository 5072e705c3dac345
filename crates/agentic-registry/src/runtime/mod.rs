//! Interfaces consumed from the host runtime, and a facade bundling the
//! registry, authenticators, and audit extension over one store.

pub mod context;
pub mod module;
pub mod store;

pub use context::{SenderId, TxContext};
pub use module::AgentModule;
pub use store::{MemoryStore, StateStore};
