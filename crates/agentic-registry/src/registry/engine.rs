//! Registration and status queries.

use crate::agent::{AgentId, AgentStatus};
use crate::crypto::hashing::CodeHash;
use crate::error::{RegistryError, Result};
use crate::runtime::StateStore;

/// Register `id` bound to `credential_commitment`.
///
/// Writes `{active: true, last_message_id: 0, credential_commitment}`.
/// Fails with `AlreadyRegistered` if an active status exists, in which
/// case nothing is written.
pub fn register<S: StateStore + ?Sized>(
    store: &mut S,
    id: AgentId,
    credential_commitment: CodeHash,
) -> Result<AgentStatus> {
    if status(store, &id).active {
        log::debug!("registration rejected: {id} already active");
        return Err(RegistryError::AlreadyRegistered(id));
    }

    let registered = AgentStatus::registered(credential_commitment);
    store.put_agent_status(id, registered);
    log::info!("registered {id}");
    Ok(registered)
}

/// Current status of `id`. Absent entries read as the inactive default.
pub fn status<S: StateStore + ?Sized>(store: &S, id: &AgentId) -> AgentStatus {
    store.agent_status(id).unwrap_or_default()
}

/// True once `id` has been registered.
pub fn is_active<S: StateStore + ?Sized>(store: &S, id: &AgentId) -> bool {
    status(store, id).active
}
