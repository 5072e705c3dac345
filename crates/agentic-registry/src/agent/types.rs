//! Field-sized identifiers and the agent status record.
//!
//! Both `AgentId` and `MessageId` are 32-byte big-endian unsigned values.
//! Big-endian byte order coincides with numeric order, so the derived
//! `Ord` compares them as numbers.

use serde::{Deserialize, Serialize};

use crate::crypto::hashing::CodeHash;

/// Number of bytes in a field-sized value.
pub const FIELD_BYTES: usize = 32;

mod field_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::FIELD_BYTES;

    pub fn serialize<S>(bytes: &[u8; FIELD_BYTES], s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D>(d: D) -> std::result::Result<[u8; FIELD_BYTES], D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(d)?;
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(&hex_str);
        let bytes = hex::decode(hex_str).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("field value must be 32 bytes"))
    }
}

fn widen(value: u128) -> [u8; FIELD_BYTES] {
    let mut bytes = [0u8; FIELD_BYTES];
    bytes[FIELD_BYTES - 16..].copy_from_slice(&value.to_be_bytes());
    bytes
}

fn narrow(bytes: &[u8; FIELD_BYTES]) -> Option<u128> {
    let (high, low) = bytes.split_at(FIELD_BYTES - 16);
    if high.iter().any(|&b| b != 0) {
        return None;
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(low);
    Some(u128::from_be_bytes(out))
}

// ── AgentId ──────────────────────────────────────────────────────────────────

/// Opaque, caller-chosen identifier of an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(#[serde(with = "field_serde")] pub [u8; FIELD_BYTES]);

impl AgentId {
    /// Build from raw big-endian bytes.
    pub fn from_bytes(bytes: [u8; FIELD_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.0
    }
}

impl From<u64> for AgentId {
    fn from(value: u64) -> Self {
        Self(widen(u128::from(value)))
    }
}

impl From<u128> for AgentId {
    fn from(value: u128) -> Self {
        Self(widen(value))
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match narrow(&self.0) {
            Some(small) => write!(f, "agent#{small}"),
            None => write!(f, "agent#0x{}", hex::encode(self.0)),
        }
    }
}

// ── MessageId ────────────────────────────────────────────────────────────────

/// Caller-supplied sequence number of a message.
///
/// Accepted ids must be strictly increasing per agent; gaps are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(#[serde(with = "field_serde")] pub [u8; FIELD_BYTES]);

impl MessageId {
    /// The initial `last_message_id` of every agent.
    pub const ZERO: Self = Self([0u8; FIELD_BYTES]);

    /// Build from raw big-endian bytes.
    pub fn from_bytes(bytes: [u8; FIELD_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.0
    }

    /// The value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        narrow(&self.0)
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(widen(u128::from(value)))
    }
}

impl From<u128> for MessageId {
    fn from(value: u128) -> Self {
        Self(widen(value))
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match narrow(&self.0) {
            Some(small) => write!(f, "{small}"),
            None => write!(f, "0x{}", hex::encode(self.0)),
        }
    }
}

// ── AgentStatus ──────────────────────────────────────────────────────────────

/// Per-agent record owned by the registry.
///
/// The default value is what an absent key reads as: inactive, with a zero
/// sequence and a zero commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    /// False until registration, then permanently true.
    pub active: bool,
    /// Highest accepted message id (zero before the first message).
    pub last_message_id: MessageId,
    /// Hash of the agent's security code.
    pub credential_commitment: CodeHash,
}

impl AgentStatus {
    /// The status written by a successful registration.
    pub fn registered(credential_commitment: CodeHash) -> Self {
        Self {
            active: true,
            last_message_id: MessageId::ZERO,
            credential_commitment,
        }
    }
}
