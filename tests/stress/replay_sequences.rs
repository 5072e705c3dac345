//! Stress test: long message sequences with interleaved replays.

#[path = "../common/mod.rs"]
mod common;

use agentic_registry::{AgentId, MessageId, ModuleConfig, RegistryError};
use common::{random_message, TestChain};

#[test]
fn thousand_sequential_messages() {
    let mut chain = TestChain::new(ModuleConfig::default());
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register");

    for n in 1..=1000u64 {
        chain
            .send_message(n, &random_message(a, "s1"))
            .unwrap_or_else(|e| panic!("message {n} rejected: {e}"));
    }
    assert_eq!(chain.status(1).last_message_id, MessageId::from(1000u64));
}

#[test]
fn every_replay_rejected() {
    let mut chain = TestChain::new(ModuleConfig::default());
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register");

    for n in 1..=200u64 {
        chain
            .send_message(n * 2, &random_message(a, "s1"))
            .expect("fresh id accepted");
        for old in [0, n, n * 2 - 1, n * 2] {
            let err = chain
                .send_message(old, &random_message(a, "s1"))
                .unwrap_err();
            assert!(matches!(err, RegistryError::StaleSequence { .. }));
        }
    }
    assert_eq!(chain.status(1).last_message_id, MessageId::from(400u64));
}

#[test]
fn gaps_are_allowed() {
    let mut chain = TestChain::new(ModuleConfig::default());
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register");

    let mut id = 0u64;
    for step in 1..=100u64 {
        id += step * step;
        chain
            .send_message(id, &random_message(a, "s1"))
            .expect("larger id accepted");
    }
    assert_eq!(chain.status(1).last_message_id, MessageId::from(id));

    // Anything in a skipped gap is now stale.
    assert!(chain.send_message(id - 1, &random_message(a, "s1")).is_err());
}

#[test]
fn wide_message_ids() {
    let mut chain = TestChain::new(ModuleConfig::default());
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register");

    chain
        .send_message(u64::MAX, &random_message(a, "s1"))
        .expect("max u64 accepted");
    assert!(chain.send_message(u64::MAX, &random_message(a, "s1")).is_err());
    assert_eq!(
        chain.status(1).last_message_id.to_u128(),
        Some(u64::MAX as u128)
    );
}
