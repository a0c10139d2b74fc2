//! AES-256 and AES-256-CBC known-answer tests

use kcrypt_algorithms::{Aes256, BlockCipher, Cbc};
use kcrypt_tests::vectors::{AES256_BLOCK, AES256_CBC, AES256_CBC_PADDED};
use kcrypt_tests::h;

#[test]
fn aes256_block_vectors() {
    for (i, v) in AES256_BLOCK.iter().enumerate() {
        let cipher = Aes256::from_slice(&h(v.key)).unwrap();
        let mut block = h(v.plaintext);

        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), v.ciphertext, "encrypt vector {}", i);

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), v.plaintext, "decrypt vector {}", i);
    }
}

#[test]
fn aes256_cbc_unpadded_vectors() {
    for v in AES256_CBC {
        let cbc = Cbc::new(Aes256::from_slice(&h(v.key)).unwrap(), &h(v.iv)).unwrap();

        let ct = cbc.encrypt_blocks(&h(v.plaintext)).unwrap();
        assert_eq!(hex::encode(&ct), v.ciphertext);

        let pt = cbc.decrypt_blocks(&ct).unwrap();
        assert_eq!(hex::encode(&pt), v.plaintext);
    }
}

#[test]
fn aes256_cbc_padded_vectors() {
    for (key, iv, plaintext, ciphertext) in AES256_CBC_PADDED {
        let ct = kcrypt::aes::encrypt(&h(plaintext), *key, *iv).unwrap();
        assert_eq!(hex::encode(&ct), *ciphertext);

        let pt = kcrypt::aes::decrypt(*ciphertext, *key, *iv).unwrap();
        assert_eq!(hex::encode(&pt), *plaintext);
    }
}

#[test]
fn first_cbc_block_under_zero_iv_is_ecb() {
    let zero_iv = [0u8; 16];
    for v in AES256_BLOCK {
        let ct = kcrypt::aes::encrypt(v.plaintext, v.key, &zero_iv).unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(hex::encode(&ct[..16]), v.ciphertext);
    }
}
