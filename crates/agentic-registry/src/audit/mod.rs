//! Audit extension: per-agent provenance of accepted messages.
//!
//! [`Audited`] wraps any [`Authenticate`](crate::authenticator::Authenticate)
//! implementation. It delegates first and touches the audit record only
//! after the delegate has committed, so a rejected message never changes
//! the record and auditing never changes what is accepted.

pub mod extension;
pub mod types;

pub use extension::{audit_record, Audited};
pub use types::AuditRecord;
