//! Schnorr signature vectors and properties

use kcrypt::{get_x_only_public_key, is_valid_private_key, schnorr};
use kcrypt_api::Signature;
use kcrypt_sign::{Schnorr, SchnorrSignature};
use kcrypt_tests::vectors::SCHNORR;
use kcrypt_tests::{h, h_array, test_rng};
use proptest::prelude::*;

#[test]
fn deterministic_vectors() {
    for (i, v) in SCHNORR.iter().enumerate() {
        let pk = get_x_only_public_key(v.secret_key).unwrap();
        assert_eq!(hex::encode(pk), v.public_key, "public key {}", i);

        let sig = schnorr::sign_with_aux(v.message, v.secret_key, v.aux).unwrap();
        assert_eq!(hex::encode(sig), v.signature, "signature {}", i);

        assert!(schnorr::verify(v.signature, v.message, v.public_key), "verify {}", i);
    }
}

#[test]
fn engine_and_facade_agree() {
    for v in SCHNORR {
        let sig = Schnorr::sign_with_aux(
            &h_array(v.message),
            &h_array(v.secret_key),
            &h_array(v.aux),
        )
        .unwrap();
        assert_eq!(sig, SchnorrSignature(h_array(v.signature)));
        assert!(Schnorr::verify(&sig.0, &h(v.message), &h(v.public_key)));
    }
}

#[test]
fn signature_trait_roundtrip() {
    let mut rng = test_rng(42);
    let keypair = Schnorr::keypair(&mut rng).unwrap();
    let pk = Schnorr::public_key(&keypair);
    let sk = Schnorr::secret_key(&keypair);

    let msg = kcrypt::sha256(b"trait message").unwrap();
    let sig = <Schnorr as Signature>::sign(&msg, &sk).unwrap();
    assert!(<Schnorr as Signature>::verify(&msg, &sig, &pk).is_ok());

    let other = kcrypt::sha256(b"other message").unwrap();
    assert!(<Schnorr as Signature>::verify(&other, &sig, &pk).is_err());
}

#[test]
fn every_signature_is_64_bytes() {
    for _ in 0..8 {
        let sk = kcrypt::random_private_key().unwrap();
        let msg = kcrypt::random_bytes(32).unwrap();
        assert_eq!(schnorr::sign(&msg, &sk).unwrap().len(), 64);
    }
}

fn private_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("valid scalar", |k| is_valid_private_key(k))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_then_verify(
        sk in private_key(),
        msg in any::<[u8; 32]>(),
        aux in any::<[u8; 32]>()
    ) {
        let sig = schnorr::sign_with_aux(&msg, &sk, &aux).unwrap();
        let pk = get_x_only_public_key(&sk).unwrap();
        prop_assert!(schnorr::verify(&sig, &msg, &pk));
    }

    #[test]
    fn single_bit_flips_are_rejected(
        sk in private_key(),
        msg in any::<[u8; 32]>(),
        sig_bit in 0usize..512,
        msg_bit in 0usize..256,
        pk_bit in 0usize..256
    ) {
        let sig = schnorr::sign(&msg, &sk).unwrap();
        let pk = get_x_only_public_key(&sk).unwrap();

        let mut bad_sig = sig;
        bad_sig[sig_bit / 8] ^= 1 << (sig_bit % 8);
        prop_assert!(!schnorr::verify(&bad_sig, &msg, &pk));

        let mut bad_msg = msg;
        bad_msg[msg_bit / 8] ^= 1 << (msg_bit % 8);
        prop_assert!(!schnorr::verify(&sig, &bad_msg, &pk));

        let mut bad_pk = pk;
        bad_pk[pk_bit / 8] ^= 1 << (pk_bit % 8);
        prop_assert!(!schnorr::verify(&sig, &msg, &bad_pk));
    }

    #[test]
    fn verify_never_panics(
        sig in prop::collection::vec(any::<u8>(), 0..80),
        msg in prop::collection::vec(any::<u8>(), 0..40),
        pk in prop::collection::vec(any::<u8>(), 0..40)
    ) {
        let _ = schnorr::verify(&sig, &msg, &pk);
    }
}
