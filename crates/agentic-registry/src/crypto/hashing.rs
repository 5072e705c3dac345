//! Security-code hashing.
//!
//! The same hasher must build the credential commitment at registration,
//! the direct check in the baseline authenticator, and the constraint the
//! prover enforces. Otherwise the two authentication paths disagree.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RegistryError, Result};
use crate::message::SecurityCode;

/// Domain tag prepended to every security-code hash.
pub const DEFAULT_CODE_DOMAIN: &str = "agentic-registry/security-code/v1";

/// A 32-byte digest of a security code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeHash {
    #[serde(with = "hash_serde")]
    bytes: [u8; 32],
}

mod hash_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 32], s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D>(d: D) -> std::result::Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(d)?;
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(&hex_str);
        let bytes = hex::decode(hex_str).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("hash must be 32 bytes"))
    }
}

impl CodeHash {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Create from a hex string (with or without `0x` prefix).
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)
            .map_err(|e| RegistryError::SerializationError(format!("invalid hash hex: {e}")))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| RegistryError::SerializationError("hash must be 32 bytes".into()))?;
        Ok(Self { bytes })
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl std::fmt::Display for CodeHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Deterministic, collision-resistant digest over a security code.
pub trait CodeHasher {
    fn hash_code(&self, code: &SecurityCode) -> CodeHash;

    /// Domain tag the digest is separated under. Proofs carry it so a
    /// verifier can refuse hashes built under another domain.
    fn domain(&self) -> &str;
}

/// SHA-256 over a domain tag followed by each code point as a big-endian
/// `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha256CodeHasher {
    domain: String,
}

impl Sha256CodeHasher {
    /// A hasher with a custom domain tag.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for Sha256CodeHasher {
    fn default() -> Self {
        Self::with_domain(DEFAULT_CODE_DOMAIN)
    }
}

impl CodeHasher for Sha256CodeHasher {
    fn hash_code(&self, code: &SecurityCode) -> CodeHash {
        let mut hasher = Sha256::new();
        hasher.update((self.domain.len() as u64).to_be_bytes());
        hasher.update(self.domain.as_bytes());
        for point in code.code_points() {
            hasher.update(point.to_be_bytes());
        }
        CodeHash::from_bytes(hasher.finalize().into())
    }

    fn domain(&self) -> &str {
        &self.domain
    }
}

/// The commitment an agent registers with: the hash of its security code.
pub fn credential_commitment<H: CodeHasher + ?Sized>(hasher: &H, code: &SecurityCode) -> CodeHash {
    hasher.hash_code(code)
}
