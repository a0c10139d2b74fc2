//! AES-256-CBC with PKCS#7 padding

use kcrypt_algorithms::{Aes256, Cbc};
use kcrypt_api::Result;

use crate::input::Input;

fn cbc(key: Input<'_>, iv: Input<'_>) -> Result<Cbc<Aes256>> {
    let key = key.to_bytes()?;
    let iv = iv.to_bytes()?;
    let cipher = Aes256::from_slice(&key)?;
    Ok(Cbc::new(cipher, &iv)?)
}

/// Encrypt with a 32-byte key and 16-byte IV. Always appends padding.
pub fn encrypt<'a, 'b, 'c>(
    plaintext: impl Into<Input<'a>>,
    key: impl Into<Input<'b>>,
    iv: impl Into<Input<'c>>,
) -> Result<Vec<u8>> {
    let plaintext = plaintext.into().to_bytes()?;
    Ok(cbc(key.into(), iv.into())?.encrypt(&plaintext)?)
}

/// Decrypt and strip padding; the ciphertext must be block-aligned
pub fn decrypt<'a, 'b, 'c>(
    ciphertext: impl Into<Input<'a>>,
    key: impl Into<Input<'b>>,
    iv: impl Into<Input<'c>>,
) -> Result<Vec<u8>> {
    let ciphertext = ciphertext.into().to_bytes()?;
    Ok(cbc(key.into(), iv.into())?.decrypt(&ciphertext)?)
}
