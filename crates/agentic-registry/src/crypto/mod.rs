//! Cryptographic primitives for AgenticRegistry.
//!
//! This module provides:
//! - The security-code hash shared by registration, direct checks, and
//!   the proof circuit
//! - Ed25519 key pairs for proof sealing and sender identities
//! - Ed25519 signing and verification helpers

pub mod hashing;
pub mod keys;
pub mod signing;

pub use hashing::{credential_commitment, CodeHash, CodeHasher, Sha256CodeHasher};
pub use keys::Ed25519KeyPair;
