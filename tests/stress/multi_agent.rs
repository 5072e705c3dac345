//! Stress test: many agents sharing one store, interleaved.

#[path = "../common/mod.rs"]
mod common;

use agentic_registry::{AgentId, MessageId, ModuleConfig, RegistryError};
use common::{random_message, TestChain};
use rand::seq::SliceRandom;

const AGENTS: u64 = 100;

fn code_for(i: u64) -> String {
    let a = char::from(b'a' + (i % 26) as u8);
    let b = char::from(b'0' + (i % 10) as u8);
    format!("{a}{b}")
}

#[test]
fn hundred_agents_sequence_independently() {
    let mut chain = TestChain::new(ModuleConfig {
        audit: true,
        ..ModuleConfig::default()
    });
    for i in 1..=AGENTS {
        chain
            .register(AgentId::from(i), &code_for(i))
            .expect("register");
    }
    assert_eq!(chain.module().store().agents().len(), AGENTS as usize);

    // Agent i sends ids 1..=i, in a shuffled agent order per round.
    let mut order: Vec<u64> = (1..=AGENTS).collect();
    let mut rng = rand::thread_rng();
    for round in 1..=AGENTS {
        order.shuffle(&mut rng);
        for &i in &order {
            if round <= i {
                chain
                    .send_message(round, &random_message(AgentId::from(i), &code_for(i)))
                    .unwrap_or_else(|e| panic!("agent {i} round {round}: {e}"));
            }
        }
    }

    for i in 1..=AGENTS {
        assert_eq!(chain.status(i).last_message_id, MessageId::from(i));
        assert_eq!(chain.audit_record(i).nonce, i);
    }
}

#[test]
fn codes_do_not_cross_agents() {
    let mut chain = TestChain::new(ModuleConfig::default());
    for i in 1..=26u64 {
        chain
            .register(AgentId::from(i), &code_for(i))
            .expect("register");
    }
    for i in 1..=26u64 {
        let j = i % 26 + 1;
        let err = chain
            .send_message(1, &random_message(AgentId::from(i), &code_for(j)))
            .unwrap_err();
        assert!(matches!(err, RegistryError::CredentialMismatch), "agent {i}");
    }
    for i in 1..=26u64 {
        assert_eq!(chain.status(i).last_message_id, MessageId::ZERO);
    }
}

#[test]
fn one_agents_progress_does_not_stale_another() {
    let mut chain = TestChain::new(ModuleConfig::default());
    let a = AgentId::from(1u64);
    let b = AgentId::from(2u64);
    chain.register(a, "aa").expect("register A");
    chain.register(b, "bb").expect("register B");

    chain
        .send_message(500, &random_message(a, "aa"))
        .expect("A at 500");
    chain
        .send_message(1, &random_message(b, "bb"))
        .expect("B still starts at 1");
    assert_eq!(chain.status(1).last_message_id, MessageId::from(500u64));
    assert_eq!(chain.status(2).last_message_id, MessageId::from(1u64));
}
