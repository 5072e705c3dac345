//! Error types for AgenticRegistry.
//!
//! Every rejection leaves state untouched. Security codes and witnesses
//! are never included in error messages.

use crate::agent::{AgentId, MessageId};

/// Registry error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Agent already registered: {0}")]
    AlreadyRegistered(AgentId),

    #[error("Agent is not active: {0}")]
    AgentInactive(AgentId),

    #[error("Security code hash does not match the credential commitment")]
    CredentialMismatch,

    #[error("Invalid proof: {0}")]
    InvalidProof(String),

    #[error("Stale message id {got}: last accepted is {last}")]
    StaleSequence { last: MessageId, got: MessageId },

    #[error("Invalid text length: expected {expected} characters, got {actual}")]
    InvalidTextLength { expected: usize, actual: usize },

    #[error("Witness does not satisfy the circuit for the stated public input")]
    UnsatisfiedConstraint,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Plaintext security codes are disabled for this module")]
    PlaintextDisabled,

    #[error("Proof-gated messages are disabled: no prover key configured")]
    ProofGateDisabled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// True for the rejections a caller fixes by changing its input
    /// (register first, fix the credential, bump the message id).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRegistered(_)
                | Self::AgentInactive(_)
                | Self::CredentialMismatch
                | Self::InvalidProof(_)
                | Self::StaleSequence { .. }
        )
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RegistryError>;
