//! Integration test: proof-gated messages, from an author's witness to an
//! accepted message, with only the proof crossing the boundary.

#[path = "../common/mod.rs"]
mod common;

use agentic_registry::{
    AgentId, AttestedProver, CredentialProof, Ed25519KeyPair, MessageId, ModuleConfig, ProvenMessage,
    Prover, PublicInput, RegistryError, Witness,
};
use common::{random_message, TestChain};

fn proof_chain() -> (TestChain, AttestedProver) {
    let key_pair = Ed25519KeyPair::generate();
    let config = ModuleConfig {
        accept_plaintext: false,
        prover_key: Some(key_pair.verifying_key_base64()),
        ..ModuleConfig::default()
    };
    (TestChain::new(config), AttestedProver::new(key_pair))
}

#[test]
fn proof_scenario_mirrors_baseline() {
    let (mut chain, prover) = proof_chain();
    let a = AgentId::from(1u64);
    let b = AgentId::from(2u64);
    chain.register(a, "s1").expect("register A");

    let right = prover
        .prove_message(&random_message(a, "s1"))
        .expect("prove right code");
    chain.send_proof(1, &right).expect("first proof accepted");
    assert_eq!(chain.status(1).last_message_id, MessageId::from(1u64));

    let err = chain.send_proof(1, &right).unwrap_err();
    assert!(matches!(err, RegistryError::StaleSequence { .. }));

    let wrong = prover
        .prove_message(&random_message(a, "s2"))
        .expect("prove other code");
    let err = chain.send_proof(2, &wrong).unwrap_err();
    assert!(matches!(err, RegistryError::CredentialMismatch));

    let stranger = prover
        .prove_message(&random_message(b, "s1"))
        .expect("prove for stranger");
    let err = chain.send_proof(1, &stranger).unwrap_err();
    assert!(matches!(err, RegistryError::AgentInactive(_)));
}

#[test]
fn plaintext_rejected_when_disabled() {
    let (mut chain, _) = proof_chain();
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register A");
    let err = chain.send_message(1, &random_message(a, "s1")).unwrap_err();
    assert!(matches!(err, RegistryError::PlaintextDisabled));
    assert_eq!(chain.status(1).last_message_id, MessageId::ZERO);
}

#[test]
fn proof_over_the_wire() {
    let (mut chain, prover) = proof_chain();
    let a = AgentId::from(1u64);
    chain.register(a, "k7").expect("register A");

    let public_input = PublicInput::new(chain.commitment("k7"));
    let message = random_message(a, "k7");
    let proof = prover
        .prove(public_input, &Witness::from_message(&message))
        .expect("prove");

    let bytes = proof.to_bytes().expect("encode");
    let received = CredentialProof::from_bytes(&bytes).expect("decode");
    let claim = ProvenMessage::new(a, received);
    assert!(chain.send_proof(1, &claim).is_ok());
}

#[test]
fn garbage_bytes_are_invalid_proofs() {
    let err = CredentialProof::from_bytes(&[0xff; 7]).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidProof(_)));
}

#[test]
fn proof_from_untrusted_prover_rejected() {
    let (mut chain, _) = proof_chain();
    let a = AgentId::from(1u64);
    chain.register(a, "s1").expect("register A");

    let rogue = AttestedProver::new(Ed25519KeyPair::generate());
    let claim = rogue
        .prove_message(&random_message(a, "s1"))
        .expect("rogue proves");
    let err = chain.send_proof(1, &claim).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidProof(_)));
    assert_eq!(chain.status(1).last_message_id, MessageId::ZERO);
}

#[test]
fn prover_refuses_false_statement() {
    let (chain, prover) = proof_chain();
    let message = random_message(AgentId::from(1u64), "s1");
    let claimed = PublicInput::new(chain.commitment("s2"));
    let err = prover
        .prove(claimed, &Witness::from_message(&message))
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnsatisfiedConstraint));
}
