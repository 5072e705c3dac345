//! Host facade over one store.
//!
//! `AgentModule` is what a runtime dispatches calls against: it owns the
//! store and the configured authenticators, and applies auditing to both
//! message paths when enabled.

use crate::agent::{AgentId, AgentStatus, MessageId};
use crate::audit::{self, AuditRecord, Audited};
use crate::authenticator::{Accepted, Authenticate, CodeAuthenticator, ProofAuthenticator};
use crate::config::ModuleConfig;
use crate::crypto::hashing::{credential_commitment, CodeHash, Sha256CodeHasher};
use crate::error::{RegistryError, Result};
use crate::message::{Message, SecurityCode};
use crate::proof::{AttestedProofVerifier, ProvenMessage};
use crate::registry;

use super::context::TxContext;
use super::store::StateStore;

/// Registry, authenticators, and audit extension bound to a store.
pub struct AgentModule<S> {
    store: S,
    config: ModuleConfig,
    code_auth: CodeAuthenticator<Sha256CodeHasher>,
    proof_auth: Option<ProofAuthenticator<AttestedProofVerifier>>,
}

impl<S: StateStore> AgentModule<S> {
    /// Build a module. Fails if the configured prover key is invalid.
    pub fn new(store: S, config: ModuleConfig) -> Result<Self> {
        let code_auth = CodeAuthenticator::new(config.hasher());
        let proof_auth = config.proof_verifier()?.map(ProofAuthenticator::new);
        log::debug!(
            "agent module: plaintext={} proofs={} audit={}",
            config.accept_plaintext,
            proof_auth.is_some(),
            config.audit
        );
        Ok(Self {
            store,
            config,
            code_auth,
            proof_auth,
        })
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Commitment for `code` under this module's hasher.
    pub fn commitment_for(&self, code: &SecurityCode) -> CodeHash {
        credential_commitment(self.code_auth.hasher(), code)
    }

    /// Register an agent. See [`registry::register`].
    pub fn register(&mut self, id: AgentId, commitment: CodeHash) -> Result<AgentStatus> {
        registry::register(&mut self.store, id, commitment)
    }

    /// Accept a baseline message.
    pub fn send_message(
        &mut self,
        ctx: &TxContext,
        message_id: MessageId,
        message: &Message,
    ) -> Result<Accepted> {
        if !self.config.accept_plaintext {
            return Err(RegistryError::PlaintextDisabled);
        }
        dispatch(
            &self.code_auth,
            self.config.audit,
            &mut self.store,
            ctx,
            message_id,
            message,
        )
    }

    /// Accept a proof-gated message.
    pub fn send_proof(
        &mut self,
        ctx: &TxContext,
        message_id: MessageId,
        claim: &ProvenMessage,
    ) -> Result<Accepted> {
        let Some(proof_auth) = self.proof_auth.as_ref() else {
            return Err(RegistryError::ProofGateDisabled);
        };
        dispatch(
            proof_auth,
            self.config.audit,
            &mut self.store,
            ctx,
            message_id,
            claim,
        )
    }

    pub fn status(&self, id: &AgentId) -> AgentStatus {
        registry::status(&self.store, id)
    }

    pub fn audit_record(&self, id: &AgentId) -> AuditRecord {
        audit::audit_record(&self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn dispatch<A, S>(
    auth: &A,
    audited: bool,
    store: &mut S,
    ctx: &TxContext,
    message_id: MessageId,
    claim: &A::Claim,
) -> Result<Accepted>
where
    A: Authenticate,
    S: StateStore + ?Sized,
{
    if audited {
        Audited::new(auth).accept(store, ctx, message_id, claim)
    } else {
        auth.accept(store, ctx, message_id, claim)
    }
}
