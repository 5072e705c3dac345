//! Module configuration.
//!
//! Read from JSON, for example:
//!
//! ```json
//! {
//!   "accept_plaintext": false,
//!   "prover_key": "<base64 Ed25519 verifying key>",
//!   "audit": true
//! }
//! ```
//!
//! Missing fields take their defaults; unknown fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::hashing::{Sha256CodeHasher, DEFAULT_CODE_DOMAIN};
use crate::error::{RegistryError, Result};
use crate::proof::AttestedProofVerifier;

/// Configuration of an [`AgentModule`](crate::runtime::AgentModule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Accept baseline messages carrying the security code in the clear.
    pub accept_plaintext: bool,
    /// Base64 verifying key of the trusted proving service. Without it the
    /// proof-gated path is disabled.
    pub prover_key: Option<String>,
    /// Record audit metadata for accepted messages.
    pub audit: bool,
    /// Domain tag of the security-code hash. Must match the one used to
    /// build commitments and proofs.
    pub code_domain: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            accept_plaintext: true,
            prover_key: None,
            audit: false,
            code_domain: DEFAULT_CODE_DOMAIN.to_string(),
        }
    }
}

impl ModuleConfig {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RegistryError::SerializationError(e.to_string()))
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RegistryError::SerializationError(e.to_string()))
    }

    /// The security-code hasher this configuration selects.
    pub fn hasher(&self) -> Sha256CodeHasher {
        Sha256CodeHasher::with_domain(self.code_domain.clone())
    }

    /// The proof verifier, if a prover key is configured. It expects
    /// proofs built under `code_domain`.
    pub fn proof_verifier(&self) -> Result<Option<AttestedProofVerifier>> {
        self.prover_key
            .as_deref()
            .map(|key| {
                AttestedProofVerifier::from_base64(key)
                    .map(|verifier| verifier.for_domain(self.code_domain.as_str()))
            })
            .transpose()
    }
}
