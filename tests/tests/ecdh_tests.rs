//! Key derivation, point encoding and ECDH properties

use kcrypt::{get_public_key, get_public_key_with_format, get_shared_secret, PointFormat};
use kcrypt_algorithms::k256::{FieldElement, Point};
use kcrypt_api::KeyAgreement;
use kcrypt_ecdh::EcdhK256;
use kcrypt_tests::{h, test_rng};
use proptest::prelude::*;

const P: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

#[test]
fn private_key_one_gives_generator() {
    let pk = get_public_key(
        "0000000000000000000000000000000000000000000000000000000000000001",
        true,
    )
    .unwrap();
    assert_eq!(
        hex::encode(pk),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
}

#[test]
fn key_agreement_trait_symmetry() {
    let mut rng = test_rng(1);
    for _ in 0..4 {
        let alice = EcdhK256::keypair(&mut rng).unwrap();
        let bob = EcdhK256::keypair(&mut rng).unwrap();

        let ab = EcdhK256::shared_secret(&EcdhK256::secret_key(&alice), &EcdhK256::public_key(&bob))
            .unwrap();
        let ba = EcdhK256::shared_secret(&EcdhK256::secret_key(&bob), &EcdhK256::public_key(&alice))
            .unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.as_ref().len(), 32);
    }
}

#[test]
fn lift_x_rejects_out_of_range_and_non_residues() {
    let p: [u8; 32] = h(P).try_into().unwrap();
    assert!(Point::lift_x_bytes(&p).is_none());
    assert!(Point::lift_x_bytes(&[0xFF; 32]).is_none());

    // 0³ + 7 is not a square mod p
    assert!(Point::lift_x_bytes(&[0u8; 32]).is_none());

    // x = 1: 1 + 7 = 8 is a square mod p
    let mut one = [0u8; 32];
    one[31] = 1;
    let lifted = Point::lift_x_bytes(&one).unwrap();
    assert!(lifted.is_on_curve());
    assert!(lifted.has_even_y());
}

#[test]
fn lift_x_matches_field_lift() {
    let x = FieldElement::from_u32(1);
    let mut one = [0u8; 32];
    one[31] = 1;
    assert_eq!(Point::lift_x(&x), Point::lift_x_bytes(&one));
}

#[test]
fn decode_rejects_unknown_layouts() {
    let sk = kcrypt::random_private_key().unwrap();
    let compressed = get_public_key(&sk, true).unwrap();

    for bad in [&compressed[..20], &compressed[..], &[0x04; 33][..], &[0x02; 65][..]] {
        let mut input = bad.to_vec();
        if input.len() == 33 {
            input[0] = 0x07;
        }
        assert!(matches!(
            get_shared_secret(&sk, &input),
            Err(kcrypt::Error::InvalidPublicKeyEncoding { .. })
        ));
    }
}

fn private_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("valid scalar", |k| kcrypt::is_valid_private_key(k))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn derived_points_are_on_curve(sk in private_key()) {
        let uncompressed = get_public_key(&sk, false).unwrap();
        let point = Point::decode(&uncompressed).unwrap();
        prop_assert!(point.is_on_curve());
        prop_assert!(!point.is_identity());

        let compressed = get_public_key(&sk, true).unwrap();
        prop_assert_eq!(Point::decode(&compressed).unwrap(), point);
    }

    #[test]
    fn shared_secret_is_symmetric(a in private_key(), b in private_key()) {
        let pub_a = get_public_key(&a, true).unwrap();
        let pub_b = get_public_key(&b, false).unwrap();

        let ab = get_shared_secret(&a, &pub_b).unwrap();
        let ba = get_shared_secret(&b, &pub_a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn x_only_peer_key_gives_same_secret(a in private_key(), b in private_key()) {
        let full = get_public_key(&b, true).unwrap();
        let x_only = get_public_key_with_format(&b, PointFormat::XOnly).unwrap();
        prop_assert_eq!(x_only.len(), 32);

        // The x-coordinate of k·P and k·(−P) agree
        prop_assert_eq!(
            get_shared_secret(&a, &full).unwrap(),
            get_shared_secret(&a, &x_only).unwrap()
        );
    }
}
