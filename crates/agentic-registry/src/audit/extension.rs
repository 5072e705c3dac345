//! The auditing decorator.

use crate::agent::{AgentId, MessageId};
use crate::authenticator::{Accepted, Authenticate};
use crate::error::Result;
use crate::runtime::{StateStore, TxContext};

use super::types::AuditRecord;

/// Decorates an authenticator with audit-record bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Audited<A> {
    inner: A,
}

impl<A: Authenticate> Audited<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// The wrapped authenticator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: Authenticate> Authenticate for Audited<A> {
    type Claim = A::Claim;

    fn accept<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        message_id: MessageId,
        claim: &A::Claim,
    ) -> Result<Accepted> {
        let accepted = self.inner.accept(store, ctx, message_id, claim)?;

        let record = audit_record(store, &accepted.agent_id).advanced(ctx);
        store.put_audit_record(accepted.agent_id, record);
        log::debug!(
            "audit {}: nonce {} at height {} from {}",
            accepted.agent_id,
            record.nonce,
            record.submission_height,
            record.sender
        );

        Ok(accepted)
    }
}

/// Audit record of `id`. Agents without accepted messages read all-zero.
pub fn audit_record<S: StateStore + ?Sized>(store: &S, id: &AgentId) -> AuditRecord {
    store.audit_record(id).unwrap_or_default()
}
