//! AES-256 block cipher
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, restricted to 256-bit keys.
//!
//! The S-box and its inverse are derived at compile time from the GF(2⁸)
//! inverse and the affine transform, so no literal tables appear here.
//! The state is column-major: byte `r + 4c` holds row `r` of column `c`.

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use kcrypt_common::security::SecretBuffer;
use kcrypt_params::utils::symmetric::{
    AES256_KEY_SIZE, AES256_ROUNDS, AES256_SCHEDULE_WORDS, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Round constants for AES key expansion, indexed by `i / 8 - 1`
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
        i += 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)); maps 0 to 0
const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    // x^254 = x128·x64·x32·x16·x8·x4·x2
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// Forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let i = gf_inv(x as u8);
        table[x] = i
            ^ i.rotate_left(1)
            ^ i.rotate_left(2)
            ^ i.rotate_left(3)
            ^ i.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    table
}

const fn invert_table(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[forward[x] as usize] = x as u8;
        x += 1;
    }
    table
}

static SBOX: [u8; 256] = build_sbox();
static INV_SBOX: [u8; 256] = invert_table(&build_sbox());

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: [u32; AES256_SCHEDULE_WORDS],
}

impl CipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl Aes256 {
    /// Key the cipher from a byte slice, which must be exactly 32 bytes
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::key_length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut key_bytes = [0u8; AES256_KEY_SIZE];
        key_bytes.copy_from_slice(key);
        let cipher = Aes256 {
            round_keys: Self::expand_key(&key_bytes),
        };
        key_bytes.zeroize();
        Ok(cipher)
    }

    /// Performs AES-256 key expansion into 60 round-key words
    fn expand_key(key: &[u8; AES256_KEY_SIZE]) -> [u32; AES256_SCHEDULE_WORDS] {
        let mut w = [0u32; AES256_SCHEDULE_WORDS];

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 8..AES256_SCHEDULE_WORDS {
            let mut temp = w[i - 1];
            if i % 8 == 0 {
                temp = sub_word(rotate_word(temp)) ^ ((RCON[i / 8 - 1] as u32) << 24);
            } else if i % 8 == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - 8] ^ temp;
        }
        w
    }

    fn add_round_key(&self, state: &mut [u8; 16], round: usize) {
        for c in 0..4 {
            let k = self.round_keys[round * 4 + c].to_be_bytes();
            for r in 0..4 {
                state[4 * c + r] ^= k[r];
            }
        }
    }

    fn sub_bytes(state: &mut [u8; 16]) {
        for b in state.iter_mut() {
            *b = SBOX[*b as usize];
        }
    }

    fn inv_sub_bytes(state: &mut [u8; 16]) {
        for b in state.iter_mut() {
            *b = INV_SBOX[*b as usize];
        }
    }

    /// Row r rotates left by r positions
    fn shift_rows(state: &mut [u8; 16]) {
        let old = *state;
        for c in 0..4 {
            for r in 1..4 {
                state[r + 4 * c] = old[r + 4 * ((c + r) % 4)];
            }
        }
    }

    fn inv_shift_rows(state: &mut [u8; 16]) {
        let old = *state;
        for c in 0..4 {
            for r in 1..4 {
                state[r + 4 * ((c + r) % 4)] = old[r + 4 * c];
            }
        }
    }

    fn mix_columns(state: &mut [u8; 16]) {
        for col in state.chunks_exact_mut(4) {
            let [s0, s1, s2, s3] = [col[0], col[1], col[2], col[3]];
            col[0] = gf_mul(s0, 2) ^ gf_mul(s1, 3) ^ s2 ^ s3;
            col[1] = s0 ^ gf_mul(s1, 2) ^ gf_mul(s2, 3) ^ s3;
            col[2] = s0 ^ s1 ^ gf_mul(s2, 2) ^ gf_mul(s3, 3);
            col[3] = gf_mul(s0, 3) ^ s1 ^ s2 ^ gf_mul(s3, 2);
        }
    }

    fn inv_mix_columns(state: &mut [u8; 16]) {
        for col in state.chunks_exact_mut(4) {
            let [s0, s1, s2, s3] = [col[0], col[1], col[2], col[3]];
            col[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
            col[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
            col[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
            col[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
        }
    }
}

impl BlockCipher for Aes256 {
    type Key = SecretBuffer<AES256_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        let mut key_bytes = key.to_array();
        let cipher = Aes256 {
            round_keys: Self::expand_key(&key_bytes),
        };
        key_bytes.zeroize();
        cipher
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        self.add_round_key(&mut state, 0);
        for round in 1..AES256_ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            self.add_round_key(&mut state, round);
        }
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        self.add_round_key(&mut state, AES256_ROUNDS);

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        self.add_round_key(&mut state, AES256_ROUNDS);
        for round in (1..AES256_ROUNDS).rev() {
            Self::inv_shift_rows(&mut state);
            Self::inv_sub_bytes(&mut state);
            self.add_round_key(&mut state, round);
            Self::inv_mix_columns(&mut state);
        }
        Self::inv_shift_rows(&mut state);
        Self::inv_sub_bytes(&mut state);
        self.add_round_key(&mut state, 0);

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES256_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        let key = SecretBuffer::new(key_data);
        key_data.zeroize();
        key
    }
}
