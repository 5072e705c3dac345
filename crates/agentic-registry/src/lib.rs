//! AgenticRegistry: verifiable state transitions for an agent registry.
//!
//! Agents register once, bound to a hash commitment of a secret security
//! code. Each later message is authenticated against that commitment,
//! either by presenting the code or by a proof of knowing it, and
//! sequenced by a strictly increasing, caller-chosen message id.
//! An optional audit extension records who submitted the latest accepted
//! message, and when.

pub mod agent;
pub mod audit;
pub mod authenticator;
pub mod config;
pub mod crypto;
pub mod error;
pub mod message;
pub mod proof;
pub mod registry;
pub mod runtime;

// Re-export primary types
pub use agent::{AgentId, AgentStatus, MessageId};
pub use audit::{AuditRecord, Audited};
pub use authenticator::{Accepted, Authenticate, CodeAuthenticator, ProofAuthenticator};
pub use config::ModuleConfig;
pub use crypto::{credential_commitment, CodeHash, CodeHasher, Ed25519KeyPair, Sha256CodeHasher};
pub use error::{RegistryError, Result};
pub use message::{FixedText, Message, Payload, SecurityCode, PAYLOAD_LEN, SECURITY_CODE_LEN};

// Re-export proof types
pub use proof::{
    AttestedProofVerifier, AttestedProver, CredentialProof, ProofVerifier, ProvenMessage, Prover,
    PublicInput, Witness,
};

// Re-export runtime interfaces
pub use runtime::{AgentModule, MemoryStore, SenderId, StateStore, TxContext};
