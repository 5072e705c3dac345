//! Messages presented to the authenticator.
//!
//! A message carries a fixed-length payload and the sender's security code
//! in the clear. The proof-gated path replaces it with a
//! [`ProvenMessage`](crate::proof::ProvenMessage).

pub mod text;
pub mod types;

pub use text::{FixedText, Payload, SecurityCode, PAYLOAD_LEN, SECURITY_CODE_LEN};
pub use types::Message;
