//! Property-based tests for AES-256-CBC

use kcrypt_algorithms::{Aes256, Cbc};
use proptest::prelude::*;

fn cbc(key: &[u8; 32], iv: &[u8; 16]) -> Cbc<Aes256> {
    Cbc::new(Aes256::from_slice(key).unwrap(), iv).unwrap()
}

/// Lengths around the block boundaries plus arbitrary sizes
fn plaintext() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::sample::select(vec![0usize, 1, 15, 16, 17, 32])
            .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len)),
        prop::collection::vec(any::<u8>(), 0..=256),
    ]
}

proptest! {
    #[test]
    fn aes256_cbc_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in plaintext()
    ) {
        let ciphertext = kcrypt::aes::encrypt(&data, &key, &iv).unwrap();
        let decrypted = kcrypt::aes::decrypt(&ciphertext, &key, &iv).unwrap();
        prop_assert_eq!(decrypted, data);
    }

    #[test]
    fn ciphertext_length_always_adds_padding(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in plaintext()
    ) {
        let ciphertext = cbc(&key, &iv).encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), (data.len() / 16 + 1) * 16);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 32]>(),
        key2 in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in plaintext()
    ) {
        prop_assume!(key1 != key2);

        let ct1 = cbc(&key1, &iv).encrypt(&data).unwrap();
        let ct2 = cbc(&key2, &iv).encrypt(&data).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any::<[u8; 32]>(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in plaintext()
    ) {
        prop_assume!(iv1 != iv2);

        let ct1 = cbc(&key, &iv1).encrypt(&data).unwrap();
        let ct2 = cbc(&key, &iv2).encrypt(&data).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn misaligned_ciphertext_is_rejected(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..=100)
            .prop_filter("not block aligned", |d| d.len() % 16 != 0)
    ) {
        let err = kcrypt::aes::decrypt(&data, &key, &iv).unwrap_err();
        let is_length_error = matches!(err, kcrypt::Error::CiphertextLength { .. });
        prop_assert!(is_length_error);
    }
}
