//! Baseline authenticator: the security code travels with the message.

use crate::agent::MessageId;
use crate::crypto::hashing::{CodeHasher, Sha256CodeHasher};
use crate::error::{RegistryError, Result};
use crate::message::Message;
use crate::runtime::{StateStore, TxContext};

use super::{admit, Accepted, Authenticate};

/// Accepts messages whose security code hashes to the stored commitment.
#[derive(Debug, Clone, Default)]
pub struct CodeAuthenticator<H = Sha256CodeHasher> {
    hasher: H,
}

impl<H: CodeHasher> CodeAuthenticator<H> {
    /// Use `hasher`, which must match the one commitments were built with.
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: CodeHasher> Authenticate for CodeAuthenticator<H> {
    type Claim = Message;

    fn accept<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        _ctx: &TxContext,
        message_id: MessageId,
        message: &Message,
    ) -> Result<Accepted> {
        admit(store, message.agent_id, message_id, |status| {
            if message.security_code_hash(&self.hasher) != status.credential_commitment {
                return Err(RegistryError::CredentialMismatch);
            }
            Ok(())
        })
    }
}
