//! Agent identifiers, message sequence numbers, and the per-agent status
//! record owned by the registry.

pub mod types;

pub use types::{AgentId, AgentStatus, MessageId};
