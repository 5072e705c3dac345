//! Proof-gated authenticator: only a proof and its public hash arrive.

use crate::agent::MessageId;
use crate::error::{RegistryError, Result};
use crate::proof::{ProofVerifier, ProvenMessage};
use crate::runtime::{StateStore, TxContext};

use super::{admit, Accepted, Authenticate};

/// Accepts proven messages whose proof verifies and whose public hash
/// equals the stored commitment.
#[derive(Debug, Clone)]
pub struct ProofAuthenticator<V> {
    verifier: V,
}

impl<V: ProofVerifier> ProofAuthenticator<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }
}

impl<V: ProofVerifier> Authenticate for ProofAuthenticator<V> {
    type Claim = ProvenMessage;

    fn accept<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        _ctx: &TxContext,
        message_id: MessageId,
        claim: &ProvenMessage,
    ) -> Result<Accepted> {
        admit(store, claim.agent_id, message_id, |status| {
            self.verifier.verify(&claim.proof)?;
            if claim.security_code_hash() != status.credential_commitment {
                return Err(RegistryError::CredentialMismatch);
            }
            Ok(())
        })
    }
}
