use super::*;
use kcrypt_api::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
const TWO_G_X: &str = "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
const THREE_G_X: &str = "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

fn scalar_bytes(v: u8) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[31] = v;
    out
}

#[test]
fn test_derive_public_key_formats() {
    let one = scalar_bytes(1);

    let compressed = derive_public_key(&one, PointFormat::Compressed).unwrap();
    assert_eq!(hex::encode(&compressed), G_COMPRESSED);

    let uncompressed = derive_public_key(&one, PointFormat::Uncompressed).unwrap();
    assert_eq!(hex::encode(&uncompressed), G_UNCOMPRESSED);

    let x_only = derive_public_key(&one, PointFormat::XOnly).unwrap();
    assert_eq!(hex::encode(&x_only), &G_COMPRESSED[2..]);
}

#[test]
fn test_derive_public_key_rejects_invalid_scalar() {
    let err = derive_public_key(&[0u8; 32], PointFormat::Compressed).unwrap_err();
    assert!(matches!(err, Error::InvalidPrivateKey { .. }));

    let err = derive_public_key(&[0xFF; 32], PointFormat::Compressed).unwrap_err();
    assert!(matches!(err, Error::InvalidPrivateKey { .. }));
}

#[test]
fn test_shared_secret_known_values() {
    let g = hex::decode(G_COMPRESSED).unwrap();

    let secret = compute_shared_secret(&scalar_bytes(2), &g).unwrap();
    assert_eq!(hex::encode(secret), TWO_G_X);

    // 1 * (3G) from the peer side
    let three_g = derive_public_key(&scalar_bytes(3), PointFormat::Uncompressed).unwrap();
    let secret = compute_shared_secret(&scalar_bytes(1), &three_g).unwrap();
    assert_eq!(hex::encode(secret), THREE_G_X);
}

#[test]
fn test_shared_secret_accepts_every_encoding() {
    let alice = scalar_bytes(5);
    let bob = scalar_bytes(11);

    let expected = {
        let pk = derive_public_key(&bob, PointFormat::Compressed).unwrap();
        compute_shared_secret(&alice, &pk).unwrap()
    };

    for format in [PointFormat::Uncompressed, PointFormat::XOnly] {
        let pk = derive_public_key(&bob, format).unwrap();
        assert_eq!(compute_shared_secret(&alice, &pk).unwrap(), expected);
    }
}

#[test]
fn test_shared_secret_symmetry() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..4 {
        let (pk_a, sk_a) = EcdhK256::keypair(&mut rng).unwrap();
        let (pk_b, sk_b) = EcdhK256::keypair(&mut rng).unwrap();

        let ab = EcdhK256::shared_secret(&sk_a, &pk_b).unwrap();
        let ba = EcdhK256::shared_secret(&sk_b, &pk_a).unwrap();
        assert_eq!(ab, ba);

        let raw = compute_shared_secret(
            &sk_a.as_ref().try_into().unwrap(),
            &pk_b.to_bytes(PointFormat::Compressed).unwrap(),
        )
        .unwrap();
        assert_eq!(raw, ab.to_array());
    }
}

#[test]
fn test_bad_peer_encodings() {
    let sk = scalar_bytes(1);

    let err = compute_shared_secret(&sk, &[0x02; 10]).unwrap_err();
    assert!(matches!(err, Error::InvalidPublicKeyEncoding { length: 10, .. }));

    let mut bad_prefix = hex::decode(G_COMPRESSED).unwrap();
    bad_prefix[0] = 0x05;
    let err = compute_shared_secret(&sk, &bad_prefix).unwrap_err();
    assert!(matches!(err, Error::InvalidPublicKeyEncoding { .. }));

    // x = 0 has no square root for x³ + 7
    let err = compute_shared_secret(&sk, &[0u8; 32]).unwrap_err();
    assert!(matches!(err, Error::PointNotOnCurve { .. }));

    let mut off_curve = hex::decode(G_UNCOMPRESSED).unwrap();
    off_curve[64] ^= 1;
    let err = compute_shared_secret(&sk, &off_curve).unwrap_err();
    assert!(matches!(err, Error::PointNotOnCurve { .. }));
}

#[test]
fn test_identity_peer_rejected() {
    let sk = EcdhK256SecretKey::from_bytes(&scalar_bytes(9)).unwrap();
    let peer = EcdhK256PublicKey(Point::identity());

    let err = EcdhK256::shared_secret(&sk, &peer).unwrap_err();
    assert!(matches!(err, Error::InvalidSharedSecret { .. }));
}

#[test]
fn test_public_key_roundtrip() {
    let pk = EcdhK256PublicKey::from_bytes(&hex::decode(G_UNCOMPRESSED).unwrap()).unwrap();
    assert_eq!(
        hex::encode(pk.to_bytes(PointFormat::Compressed).unwrap()),
        G_COMPRESSED
    );
    assert_eq!(pk.point(), &Point::generator());
}

#[test]
fn test_secret_key_validation() {
    assert!(EcdhK256SecretKey::from_bytes(&[0u8; 32]).is_err());
    assert!(EcdhK256SecretKey::from_bytes(&scalar_bytes(1)).is_ok());
    assert_eq!(EcdhK256::name(), "ECDH-K256");
}
