//! Proof-gated credentials.
//!
//! A [`CredentialProof`] attests that its author knows a security code
//! hashing to the proof's public `security_code_hash`, without carrying the
//! code itself. The authenticator consumes proofs only through
//! [`ProofVerifier`]; authors build them through [`Prover`].
//!
//! The bundled backend ([`attested`]) seals the public input with a
//! trusted prover's Ed25519 signature after running the constraint check.
//! Succinct-proof backends plug in through the same traits.

pub mod attested;
pub mod types;

pub use attested::{AttestedProofVerifier, AttestedProver};
pub use types::{
    CredentialProof, ProvenMessage, PublicInput, Witness, MAX_PROOF_BYTES, SECURITY_CODE_CIRCUIT,
};

use crate::error::Result;

/// Checks a proof against its own public input.
///
/// Any failure (malformed, wrong circuit, cryptographically invalid) is
/// reported as `RegistryError::InvalidProof`.
pub trait ProofVerifier {
    fn verify(&self, proof: &CredentialProof) -> Result<()>;
}

/// Builds proofs for the security-code circuit.
///
/// Fails with `RegistryError::UnsatisfiedConstraint` when the witness does
/// not hash to the stated public input.
pub trait Prover {
    fn prove(&self, public_input: PublicInput, witness: &Witness) -> Result<CredentialProof>;
}
