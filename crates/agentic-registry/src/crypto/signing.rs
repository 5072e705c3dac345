//! Ed25519 signing over domain-separated transcripts.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Sign a message with an Ed25519 signing key.
pub fn sign(signing_key: &SigningKey, message: &[u8]) -> Signature {
    signing_key.sign(message)
}

/// Verify a signature against a public key and message.
pub fn verify(verifying_key: &VerifyingKey, message: &[u8], signature: &Signature) -> bool {
    verifying_key.verify(message, signature).is_ok()
}

/// Verify a raw signature given as bytes. Wrong lengths fail.
pub fn verify_bytes(verifying_key: &VerifyingKey, message: &[u8], signature: &[u8]) -> bool {
    let Ok(sig_array) = <[u8; SIGNATURE_LEN]>::try_from(signature) else {
        return false;
    };
    verify(verifying_key, message, &Signature::from_bytes(&sig_array))
}

/// Build a transcript: each part is length-prefixed so no two part lists
/// produce the same bytes.
pub fn transcript(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len() + 8).sum());
    for part in parts {
        out.extend_from_slice(&(part.len() as u64).to_be_bytes());
        out.extend_from_slice(part);
    }
    out
}
