//! Keyed state consumed from the host runtime.
//!
//! The host serializes calls per key; a call receives the store by
//! `&mut`, so one call's read-modify-write cannot interleave with
//! another's.

use std::collections::BTreeMap;

use crate::agent::{AgentId, AgentStatus};
use crate::audit::AuditRecord;

/// Get/set of agent statuses and audit records by agent id.
pub trait StateStore {
    fn agent_status(&self, id: &AgentId) -> Option<AgentStatus>;
    fn put_agent_status(&mut self, id: AgentId, status: AgentStatus);
    fn audit_record(&self, id: &AgentId) -> Option<AuditRecord>;
    fn put_audit_record(&mut self, id: AgentId, record: AuditRecord);
}

/// In-process store for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    statuses: BTreeMap<AgentId, AgentStatus>,
    audit: BTreeMap<AgentId, AuditRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids with a stored status, in ascending order.
    pub fn agents(&self) -> Vec<AgentId> {
        self.statuses.keys().copied().collect()
    }

    /// Number of stored statuses.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn agent_status(&self, id: &AgentId) -> Option<AgentStatus> {
        self.statuses.get(id).copied()
    }

    fn put_agent_status(&mut self, id: AgentId, status: AgentStatus) {
        self.statuses.insert(id, status);
    }

    fn audit_record(&self, id: &AgentId) -> Option<AuditRecord> {
        self.audit.get(id).copied()
    }

    fn put_audit_record(&mut self, id: AgentId, record: AuditRecord) {
        self.audit.insert(id, record);
    }
}
