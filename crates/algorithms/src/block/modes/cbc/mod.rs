//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector (IV).
//! Follows NIST SP 800-38A. [`Cbc::encrypt`] and [`Cbc::decrypt`] add and
//! strip PKCS#7 padding, while the `_blocks` variants work on aligned data.

use alloc::vec::Vec;
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, Pkcs7};
use crate::error::{validate, Result};
use kcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, AES_CBC_IV_SIZE};

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: [u8; AES_CBC_IV_SIZE],
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::parameter(
            B::block_size() == AES_BLOCK_SIZE,
            "block cipher",
            "CBC requires a 16-byte block cipher",
        )?;
        validate::iv_length("CBC initialization vector", iv.len(), AES_CBC_IV_SIZE)?;

        let mut iv_block = [0u8; AES_CBC_IV_SIZE];
        iv_block.copy_from_slice(iv);
        Ok(Self {
            cipher,
            iv: iv_block,
        })
    }

    /// Pads the plaintext with PKCS#7 and encrypts it.
    ///
    /// The ciphertext is always at least one block longer than a
    /// block-aligned plaintext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        trace!(len = plaintext.len(), "CBC encrypt");
        let mut padded = Pkcs7::pad(plaintext, AES_BLOCK_SIZE);
        let result = self.encrypt_blocks(&padded);
        padded.zeroize();
        result
    }

    /// Decrypts the ciphertext and strips the padding leniently.
    ///
    /// See [`Pkcs7::unpad`] for how malformed padding is handled.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        trace!(len = ciphertext.len(), "CBC decrypt");
        let mut padded = self.decrypt_blocks(ciphertext)?;
        let plaintext = Pkcs7::unpad(&padded).to_vec();
        padded.zeroize();
        Ok(plaintext)
    }

    /// Encrypts block-aligned plaintext without padding
    pub fn encrypt_blocks(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            for i in 0..AES_BLOCK_SIZE {
                block[i] = chunk[i] ^ prev_block[i];
            }

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts block-aligned ciphertext without removing padding
    pub fn decrypt_blocks(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let current_block = block;

            self.cipher.decrypt_block(&mut block)?;

            for i in 0..AES_BLOCK_SIZE {
                block[i] ^= prev_block[i];
            }

            plaintext.extend_from_slice(&block);
            prev_block = current_block;
        }

        Ok(plaintext)
    }
}
