//! Agent registry: one-time, credential-bound admission of agents.
//!
//! The registry exclusively owns `AgentStatus` entries. Statuses become
//! active on registration and stay active; there is no deactivation or
//! re-keying path.

pub mod engine;

pub use engine::{is_active, register, status};
