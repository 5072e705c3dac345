//! Property-based tests for the acceptance and audit invariants

#![allow(clippy::expect_used, clippy::unwrap_used)]

#[path = "../common/mod.rs"]
mod common;

use agentic_registry::{AgentId, AuditRecord, MessageId, ModuleConfig, RegistryError};
use common::{random_message, TestChain};
use proptest::prelude::*;

fn audited_chain() -> TestChain {
    TestChain::new(ModuleConfig {
        audit: true,
        ..ModuleConfig::default()
    })
}

proptest! {
    /// A wrong code is rejected as a mismatch for any message id
    #[test]
    fn wrong_code_always_mismatch(
        right in "[a-z0-9]{2}",
        wrong in "[a-z0-9]{2}",
        message_id in any::<u64>(),
    ) {
        prop_assume!(right != wrong);
        let mut chain = audited_chain();
        let a = AgentId::from(1u64);
        chain.register(a, &right).unwrap();

        let err = chain.send_message(message_id, &random_message(a, &wrong)).unwrap_err();
        prop_assert!(matches!(err, RegistryError::CredentialMismatch));
        prop_assert_eq!(chain.status(1).last_message_id, MessageId::ZERO);
        prop_assert_eq!(chain.audit_record(1), AuditRecord::default());
    }

    /// The last accepted id only grows, and equals the running maximum
    #[test]
    fn last_id_is_running_max(ids in prop::collection::vec(any::<u64>(), 1..64)) {
        let mut chain = audited_chain();
        let a = AgentId::from(1u64);
        chain.register(a, "s1").unwrap();

        let mut max = 0u64;
        let mut accepted = 0u64;
        for id in ids {
            let result = chain.send_message(id, &random_message(a, "s1"));
            if id > max {
                prop_assert!(result.is_ok());
                max = id;
                accepted += 1;
            } else {
                let stale = matches!(result, Err(RegistryError::StaleSequence { .. }));
                prop_assert!(stale);
            }
            prop_assert_eq!(chain.status(1).last_message_id, MessageId::from(max));
        }
        prop_assert_eq!(chain.audit_record(1).nonce, accepted);
    }

    /// Unregistered agents are rejected regardless of id or code
    #[test]
    fn unregistered_always_inactive(
        agent in 2u64..,
        code in "[a-z0-9]{2}",
        message_id in any::<u64>(),
    ) {
        let mut chain = audited_chain();
        chain.register(AgentId::from(1u64), "s1").unwrap();

        let id = AgentId::from(agent);
        let err = chain.send_message(message_id, &random_message(id, &code)).unwrap_err();
        prop_assert!(matches!(err, RegistryError::AgentInactive(got) if got == id));
        prop_assert!(!chain.status(agent).active);
        prop_assert_eq!(chain.module().store().agents(), vec![AgentId::from(1u64)]);
    }

    /// Audit height always reflects the most recent success
    #[test]
    fn audit_height_follows_last_success(attempts in prop::collection::vec(any::<bool>(), 1..32)) {
        let mut chain = audited_chain();
        let a = AgentId::from(1u64);
        chain.register(a, "s1").unwrap();

        let mut next = 1u64;
        let mut expected = AuditRecord::default();
        for fresh in attempts {
            let height = chain.height();
            let id = if fresh { next } else { next - 1 };
            if chain.send_message(id, &random_message(a, "s1")).is_ok() {
                expected.submission_height = height;
                expected.sender = chain.sender();
                expected.nonce += 1;
                next += 1;
            }
            prop_assert_eq!(chain.audit_record(1), expected);
        }
    }
}
