//! End-to-end scenarios over the full key lifecycle
//!
//! These tests exercise the public API the way the CLI does: generate,
//! sign, verify, certify, encode to bytes, and reload — with nothing held
//! in memory between the two sides except the encoded files.

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use vouch_core::{
    create_key_pair, create_key_pair_with_rng, KeyRecord, PrivateKeyRecord, PublicKeyRecord,
    SignatureRecord, Timestamp,
};

fn now_plus(secs: u64) -> Timestamp {
    Timestamp::new(Timestamp::now().as_secs() + secs)
}

fn deterministic_pair(seed: u64, name: &str) -> (PrivateKeyRecord, PublicKeyRecord) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    create_key_pair_with_rng(&mut rng, name, now_plus(3600)).unwrap()
}

#[test]
fn sign_then_verify_against_the_matching_public_key() {
    let (alice_private, alice_public) = create_key_pair("alice", now_plus(3600)).unwrap();

    let signature = alice_private.sign(b"hello").unwrap();
    assert_eq!(signature.signer_id, alice_public.id());
    assert!(alice_public.verify(&signature.signature, b"hello"));

    // A freshly generated unrelated key must not verify the signature.
    let (_, stranger_public) = create_key_pair("stranger", now_plus(3600)).unwrap();
    assert!(!stranger_public.verify(&signature.signature, b"hello"));
}

#[test]
fn public_key_reloads_with_identical_content() {
    let (_, alice_public) = deterministic_pair(1, "alice");

    let reloaded = KeyRecord::from_bytes(&alice_public.to_bytes().unwrap())
        .unwrap()
        .into_public()
        .unwrap();

    assert_eq!(reloaded.id(), alice_public.id());
    assert_eq!(reloaded.info(), alice_public.info());
    assert_eq!(reloaded.signature(), alice_public.signature());
    assert_eq!(reloaded.certifications(), alice_public.certifications());
}

#[test]
fn private_key_reloads_and_still_signs() {
    let (alice_private, alice_public) = deterministic_pair(2, "alice");

    let reloaded = KeyRecord::from_bytes(&alice_private.to_bytes().unwrap())
        .unwrap()
        .into_private()
        .unwrap();

    assert_eq!(reloaded.id(), alice_private.id());
    assert_eq!(reloaded.public_id(), alice_public.id());

    let signature = reloaded.sign(b"signed after reload").unwrap();
    assert!(alice_public.verify(&signature.signature, b"signed after reload"));
}

#[test]
fn certification_survives_a_roundtrip_through_bytes() {
    let (alice_private, alice_public) = deterministic_pair(3, "alice");
    let (_, bob_public) = deterministic_pair(4, "bob");

    // Alice certifies Bob, then both records travel as bytes.
    let mut bob_public = bob_public;
    alice_private.certify(&mut bob_public).unwrap();

    let alice_bytes = alice_public.to_bytes().unwrap();
    let bob_bytes = bob_public.to_bytes().unwrap();

    let alice = KeyRecord::from_bytes(&alice_bytes)
        .unwrap()
        .into_public()
        .unwrap();
    let bob = KeyRecord::from_bytes(&bob_bytes)
        .unwrap()
        .into_public()
        .unwrap();

    let certification = bob.certification(&alice.id()).unwrap();
    assert!(certification.is_valid(alice.key()));
    // Any other key material must fail the check.
    assert!(!certification.is_valid(bob.key()));
    assert!(bob.is_self_certified());
}

#[test]
fn certifications_bind_to_one_exact_self_signature() {
    let (alice_private, alice_public) = deterministic_pair(5, "alice");
    let (_, mut bob_public) = deterministic_pair(6, "bob");

    alice_private.certify(&mut bob_public).unwrap();
    let old_certification = bob_public.certification(&alice_public.id()).unwrap().clone();

    // The same Bob key (same seed) re-signs different metadata: a new
    // self-signature, as after a metadata change.
    let (_, renamed_public) = deterministic_pair(6, "bob the builder");
    assert_eq!(renamed_public.key(), bob_public.key());
    assert_ne!(renamed_public.signature(), bob_public.signature());

    // The old endorsement does not carry over to the new self-signature.
    let carried_over = vouch_core::CertificationRecord::new(
        old_certification.certifier_id,
        old_certification.signature,
        *renamed_public.signature(),
    );
    assert!(!carried_over.is_valid(alice_public.key()));

    // Against the self-signature it was issued for, it still verifies.
    assert!(old_certification.is_valid(alice_public.key()));
}

#[test]
fn signature_file_roundtrip() {
    let (alice_private, alice_public) = deterministic_pair(7, "alice");

    let signature = alice_private.sign(b"document").unwrap();
    let reloaded = SignatureRecord::from_bytes(&signature.to_bytes().unwrap()).unwrap();

    assert_eq!(reloaded, signature);
    assert!(alice_public.verify(&reloaded.signature, b"document"));
}

#[test]
fn encoding_is_stable_across_reload_cycles() {
    let (_, alice_public) = deterministic_pair(8, "alice");

    let first = alice_public.to_bytes().unwrap();
    let second = KeyRecord::from_bytes(&first)
        .unwrap()
        .to_bytes()
        .unwrap();
    assert_eq!(first, second);
}
