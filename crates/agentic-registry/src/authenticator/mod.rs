//! Message authentication and sequencing.
//!
//! Both variants run the same ordered checks against the agent's stored
//! status and commit only when all pass:
//!
//! 1. the agent is active (`AgentInactive`)
//! 2. the credential holds: a direct hash comparison in [`CodeAuthenticator`],
//!    a verified proof plus hash comparison in [`ProofAuthenticator`]
//!    (`InvalidProof`, `CredentialMismatch`)
//! 3. the message id is strictly greater than the last accepted one
//!    (`StaleSequence`)
//!
//! On success only `last_message_id` changes. Any rejection writes nothing.

pub mod baseline;
pub mod proof_gated;

pub use baseline::CodeAuthenticator;
pub use proof_gated::ProofAuthenticator;

use crate::agent::{AgentId, AgentStatus, MessageId};
use crate::error::{RegistryError, Result};
use crate::registry;
use crate::runtime::{StateStore, TxContext};

/// Outcome of an accepted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    pub agent_id: AgentId,
    /// Status as committed.
    pub status: AgentStatus,
}

/// The accept capability shared by authenticators and their decorators.
pub trait Authenticate {
    /// What a caller presents alongside the message id.
    type Claim;

    fn accept<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        message_id: MessageId,
        claim: &Self::Claim,
    ) -> Result<Accepted>;
}

impl<A: Authenticate + ?Sized> Authenticate for &A {
    type Claim = A::Claim;

    fn accept<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        message_id: MessageId,
        claim: &Self::Claim,
    ) -> Result<Accepted> {
        (**self).accept(store, ctx, message_id, claim)
    }
}

/// Shared check-and-commit routine. `check_credential` sees the stored
/// status of an active agent and decides whether the claim matches it.
pub(crate) fn admit<S, F>(
    store: &mut S,
    agent_id: AgentId,
    message_id: MessageId,
    check_credential: F,
) -> Result<Accepted>
where
    S: StateStore + ?Sized,
    F: FnOnce(&AgentStatus) -> Result<()>,
{
    let mut status = registry::status(store, &agent_id);

    if !status.active {
        log::debug!("message {message_id} rejected: {agent_id} inactive");
        return Err(RegistryError::AgentInactive(agent_id));
    }

    if let Err(e) = check_credential(&status) {
        log::debug!("message {message_id} rejected for {agent_id}: {e}");
        return Err(e);
    }

    if message_id <= status.last_message_id {
        log::debug!(
            "message {message_id} rejected for {agent_id}: last accepted {}",
            status.last_message_id
        );
        return Err(RegistryError::StaleSequence {
            last: status.last_message_id,
            got: message_id,
        });
    }

    status.last_message_id = message_id;
    store.put_agent_status(agent_id, status);
    log::debug!("accepted message {message_id} from {agent_id}");

    Ok(Accepted { agent_id, status })
}
