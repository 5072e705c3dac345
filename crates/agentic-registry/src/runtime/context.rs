//! Per-transaction context supplied by the host runtime.

use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};

/// Authenticated submitter of a transaction: a 32-byte Ed25519 public key.
///
/// The default (all zero) is the "no sender yet" value of a fresh audit
/// record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderId(pub [u8; 32]);

impl SenderId {
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        Self(key.to_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for SenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

/// Ledger height and sender of the call in progress. Valid for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxContext {
    pub height: u64,
    pub sender: SenderId,
}

impl TxContext {
    pub fn new(height: u64, sender: SenderId) -> Self {
        Self { height, sender }
    }
}
