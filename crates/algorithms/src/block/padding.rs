//! PKCS#7 padding

use alloc::vec::Vec;

/// PKCS#7 padding scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs7;

impl Pkcs7 {
    /// Append `k` bytes of value `k`, where `1 <= k <= block_size`.
    ///
    /// Input that is already block-aligned gains a full block of padding.
    pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
        let pad_len = block_size - data.len() % block_size;
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len, pad_len as u8);
        out
    }

    /// Strip padding by trusting the final byte as the pad length.
    ///
    /// The pad bytes themselves are not checked. A pad length of zero
    /// leaves `data` untouched; one longer than `data` yields an empty slice.
    pub fn unpad(data: &[u8]) -> &[u8] {
        let pad_len = match data.last() {
            Some(&b) => b as usize,
            None => return data,
        };
        if pad_len > data.len() {
            return &data[..0];
        }
        &data[..data.len() - pad_len]
    }
}
