//! Attested proof backend.
//!
//! A proving service runs the security-code circuit on the author's
//! witness and, only if the constraint holds, signs a transcript of the
//! circuit id, hash domain, and public input. The verifier needs nothing
//! but the service's Ed25519 verifying key, and the seal reveals nothing
//! about the witness to anyone but the service.
//!
//! This is an attestation, not a succinct zero-knowledge proof. Soundness
//! rests entirely on the sealing key holder: it can seal any hash without
//! knowing a preimage, and authors must hand it their witness. Deploy it
//! only where the proving service is trusted with security codes.

use ed25519_dalek::VerifyingKey;

use crate::crypto::hashing::{CodeHasher, Sha256CodeHasher, DEFAULT_CODE_DOMAIN};
use crate::crypto::keys::Ed25519KeyPair;
use crate::crypto::signing;
use crate::error::{RegistryError, Result};
use crate::message::Message;

use super::types::{CredentialProof, ProvenMessage, PublicInput, Witness, SECURITY_CODE_CIRCUIT};
use super::{ProofVerifier, Prover};

const SEAL_DOMAIN: &[u8] = b"agentic-registry/attested-seal/v1";

fn seal_transcript(circuit: &str, domain: &str, public_input: &PublicInput) -> Vec<u8> {
    signing::transcript(&[
        SEAL_DOMAIN,
        circuit.as_bytes(),
        domain.as_bytes(),
        public_input.security_code_hash.as_bytes().as_slice(),
    ])
}

// ── Prover ───────────────────────────────────────────────────────────────────

/// Proving service holding the sealing key.
pub struct AttestedProver<H = Sha256CodeHasher> {
    key_pair: Ed25519KeyPair,
    hasher: H,
}

impl AttestedProver<Sha256CodeHasher> {
    /// A prover using the default security-code hasher.
    pub fn new(key_pair: Ed25519KeyPair) -> Self {
        Self::with_hasher(key_pair, Sha256CodeHasher::default())
    }
}

impl<H: CodeHasher> AttestedProver<H> {
    /// A prover whose circuit uses `hasher`. It must be the hasher the
    /// registry's commitments were built with.
    pub fn with_hasher(key_pair: Ed25519KeyPair, hasher: H) -> Self {
        Self { key_pair, hasher }
    }

    /// The key verifiers must trust.
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.key_pair.verifying_key()
    }

    /// A verifier paired with this prover, expecting its hash domain.
    pub fn verifier(&self) -> AttestedProofVerifier {
        AttestedProofVerifier::new(*self.key_pair.verifying_key()).for_domain(self.hasher.domain())
    }

    /// Prove a message the author would otherwise send in the clear. The
    /// public input is derived from the message's own security code.
    pub fn prove_message(&self, message: &Message) -> Result<ProvenMessage> {
        let public_input = PublicInput::new(message.security_code_hash(&self.hasher));
        let witness = Witness::from_message(message);
        let proof = self.prove(public_input, &witness)?;
        Ok(ProvenMessage::new(message.agent_id, proof))
    }
}

impl<H: CodeHasher> Prover for AttestedProver<H> {
    fn prove(&self, public_input: PublicInput, witness: &Witness) -> Result<CredentialProof> {
        if self.hasher.hash_code(&witness.security_code) != public_input.security_code_hash {
            return Err(RegistryError::UnsatisfiedConstraint);
        }
        let domain = self.hasher.domain();
        let signature = signing::sign(
            self.key_pair.signing_key(),
            &seal_transcript(SECURITY_CODE_CIRCUIT, domain, &public_input),
        );
        Ok(CredentialProof {
            circuit: SECURITY_CODE_CIRCUIT.to_string(),
            domain: domain.to_string(),
            public_input,
            seal: signature.to_bytes().to_vec(),
        })
    }
}

// ── Verifier ─────────────────────────────────────────────────────────────────

/// Verifier trusting one proving service under one hash domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestedProofVerifier {
    prover_key: VerifyingKey,
    domain: String,
}

impl AttestedProofVerifier {
    /// A verifier expecting the default hash domain.
    pub fn new(prover_key: VerifyingKey) -> Self {
        Self {
            prover_key,
            domain: DEFAULT_CODE_DOMAIN.to_string(),
        }
    }

    /// Build from a base64-encoded prover key.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Ed25519KeyPair::verifying_key_from_base64(encoded).map(Self::new)
    }

    /// Expect proofs built under `domain`. It must be the domain the
    /// registry's commitments were built with.
    pub fn for_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn prover_key(&self) -> &VerifyingKey {
        &self.prover_key
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl ProofVerifier for AttestedProofVerifier {
    fn verify(&self, proof: &CredentialProof) -> Result<()> {
        if proof.circuit != SECURITY_CODE_CIRCUIT {
            return Err(RegistryError::InvalidProof(format!(
                "unknown circuit: {}",
                proof.circuit
            )));
        }
        if proof.domain != self.domain {
            return Err(RegistryError::InvalidProof(format!(
                "hash domain mismatch: proof built under {:?}, expected {:?}",
                proof.domain, self.domain
            )));
        }
        if proof.seal.len() != signing::SIGNATURE_LEN {
            return Err(RegistryError::InvalidProof(format!(
                "seal must be {} bytes, got {}",
                signing::SIGNATURE_LEN,
                proof.seal.len()
            )));
        }
        let transcript = seal_transcript(&proof.circuit, &proof.domain, &proof.public_input);
        if !signing::verify_bytes(&self.prover_key, &transcript, &proof.seal) {
            return Err(RegistryError::InvalidProof(
                "seal does not verify against the public input".into(),
            ));
        }
        Ok(())
    }
}
