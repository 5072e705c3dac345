//! Audit record.

use serde::{Deserialize, Serialize};

use crate::runtime::{SenderId, TxContext};

/// Metadata of the most recent accepted message for one agent.
///
/// All-zero until the agent's first accepted message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Ledger height of the latest accepted message.
    pub submission_height: u64,
    /// Submitter of the latest accepted message.
    pub sender: SenderId,
    /// Count of accepted messages.
    pub nonce: u64,
}

impl AuditRecord {
    /// The record after one more accepted message in `ctx`.
    ///
    /// The nonce saturates rather than wrapping.
    pub fn advanced(&self, ctx: &TxContext) -> Self {
        Self {
            submission_height: ctx.height,
            sender: ctx.sender,
            nonce: self.nonce.saturating_add(1),
        }
    }
}
