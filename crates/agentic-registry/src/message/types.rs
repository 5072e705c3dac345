//! Baseline message type.

use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::crypto::hashing::{CodeHash, CodeHasher};
use crate::error::Result;

use super::text::{Payload, SecurityCode};

/// A claim that `agent_id` sent `payload`, authenticated by `security_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub agent_id: AgentId,
    pub payload: Payload,
    pub security_code: SecurityCode,
}

impl Message {
    /// Build a message, validating payload and code lengths.
    pub fn new(agent_id: AgentId, payload: &str, security_code: &str) -> Result<Self> {
        Ok(Self {
            agent_id,
            payload: Payload::new(payload)?,
            security_code: SecurityCode::new(security_code)?,
        })
    }

    /// Hash of the security code, compared against the stored commitment.
    pub fn security_code_hash<H: CodeHasher + ?Sized>(&self, hasher: &H) -> CodeHash {
        hasher.hash_code(&self.security_code)
    }
}
