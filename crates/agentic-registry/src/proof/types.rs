//! Public input, private witness, and the proof object.

use bincode::Options;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::agent::AgentId;
use crate::crypto::hashing::CodeHash;
use crate::error::{RegistryError, Result};
use crate::message::{Message, Payload, SecurityCode};

/// Identifier of the circuit: "hash(witness.security_code) == public hash".
pub const SECURITY_CODE_CIRCUIT: &str = "agentic-registry/security-code-hash/v1";

/// Upper bound on an encoded proof.
pub const MAX_PROOF_BYTES: u64 = 16 * 1024;

/// The only value a proof reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInput {
    pub security_code_hash: CodeHash,
}

impl PublicInput {
    pub fn new(security_code_hash: CodeHash) -> Self {
        Self { security_code_hash }
    }
}

/// Private witness: the message contents. Never leaves its author.
#[derive(Debug, Clone)]
pub struct Witness {
    pub payload: Payload,
    pub security_code: SecurityCode,
}

impl Witness {
    pub fn new(payload: Payload, security_code: SecurityCode) -> Self {
        Self {
            payload,
            security_code,
        }
    }

    /// Witness for a message the author would otherwise send in the clear.
    pub fn from_message(message: &Message) -> Self {
        Self::new(message.payload, message.security_code.clone())
    }
}

impl Drop for Witness {
    fn drop(&mut self) {
        self.payload.zeroize();
        self.security_code.zeroize();
    }
}

/// A proof bound to the security-code circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialProof {
    /// Circuit the proof claims to satisfy.
    pub circuit: String,
    /// Hash domain the circuit was run under.
    pub domain: String,
    pub public_input: PublicInput,
    /// Backend-specific proof bytes.
    pub seal: Vec<u8>,
}

impl CredentialProof {
    /// Transport encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::options()
            .with_limit(MAX_PROOF_BYTES)
            .serialize(self)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))
    }

    /// Decode a proof received over the wire. Malformed input is an
    /// invalid proof.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::options()
            .with_limit(MAX_PROOF_BYTES)
            .deserialize(bytes)
            .map_err(|e| RegistryError::InvalidProof(format!("malformed proof encoding: {e}")))
    }
}

/// Hardened-variant claim: the target agent and a proof, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenMessage {
    pub agent_id: AgentId,
    pub proof: CredentialProof,
}

impl ProvenMessage {
    pub fn new(agent_id: AgentId, proof: CredentialProof) -> Self {
        Self { agent_id, proof }
    }

    /// The hash the proof claims to know a preimage of.
    pub fn security_code_hash(&self) -> CodeHash {
        self.proof.public_input.security_code_hash
    }
}
