//! Fixed-width 256-bit unsigned integer

use core::cmp::Ordering;
use zeroize::Zeroize;

/// Number of 32-bit limbs in a [`U256`]
pub const LIMBS: usize = 8;

/// 256-bit unsigned integer stored as little-endian 32-bit limbs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct U256(pub(crate) [u32; LIMBS]);

impl U256 {
    /// The value 0
    pub const ZERO: Self = U256([0; LIMBS]);
    /// The value 1
    pub const ONE: Self = U256([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Create from a small integer
    pub const fn from_u32(n: u32) -> Self {
        U256([n, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Create from little-endian limbs
    pub const fn from_limbs(limbs: [u32; LIMBS]) -> Self {
        U256(limbs)
    }

    /// Interpret 32 bytes as a big-endian integer
    pub const fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let off = (LIMBS - 1 - i) * 4;
            limbs[i] = u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
            i += 1;
        }
        U256(limbs)
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            let off = (LIMBS - 1 - i) * 4;
            out[off..off + 4].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Little-endian limbs
    pub fn limbs(&self) -> &[u32; LIMBS] {
        &self.0
    }

    /// Check whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    /// Check whether the lowest bit is set
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Check whether the lowest bit is clear
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Value of bit `i` (bit 0 is the least significant)
    pub fn bit(&self, i: usize) -> bool {
        if i >= 256 {
            return false;
        }
        (self.0[i / 32] >> (i % 32)) & 1 == 1
    }

    /// Number of significant bits
    pub fn bits(&self) -> usize {
        for i in (0..LIMBS).rev() {
            if self.0[i] != 0 {
                return i * 32 + (32 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Addition returning the wrapped sum and the carry out (0 or 1)
    pub fn adc(&self, other: &Self) -> (Self, u32) {
        let mut out = [0u32; LIMBS];
        let mut carry = 0u64;
        for i in 0..LIMBS {
            let t = self.0[i] as u64 + other.0[i] as u64 + carry;
            out[i] = t as u32;
            carry = t >> 32;
        }
        (U256(out), carry as u32)
    }

    /// Subtraction returning the wrapped difference and the borrow out (0 or 1)
    pub fn sbb(&self, other: &Self) -> (Self, u32) {
        let mut out = [0u32; LIMBS];
        let mut borrow = 0i64;
        for i in 0..LIMBS {
            let t = self.0[i] as i64 - other.0[i] as i64 + borrow;
            out[i] = t as u32;
            borrow = t >> 32;
        }
        (U256(out), (borrow & 1) as u32)
    }

    /// Wrapping negation, `2^256 - self`
    pub const fn wrapping_neg(&self) -> Self {
        let mut out = [0u32; LIMBS];
        let mut carry = 1u64;
        let mut i = 0;
        while i < LIMBS {
            let t = (!self.0[i]) as u64 + carry;
            out[i] = t as u32;
            carry = t >> 32;
            i += 1;
        }
        U256(out)
    }

    /// Full 512-bit product as sixteen little-endian limbs
    pub fn mul_wide(&self, other: &Self) -> [u32; 2 * LIMBS] {
        let mut out = [0u32; 2 * LIMBS];
        for i in 0..LIMBS {
            let mut carry = 0u64;
            for j in 0..LIMBS {
                let t = out[i + j] as u64 + (self.0[i] as u64) * (other.0[j] as u64) + carry;
                out[i + j] = t as u32;
                carry = t >> 32;
            }
            out[i + LIMBS] = carry as u32;
        }
        out
    }

    /// Shift right by one bit, shifting `top` (0 or 1) into bit 255
    pub fn shr1_with_top(&self, top: u32) -> Self {
        let mut out = [0u32; LIMBS];
        for i in 0..LIMBS {
            let hi = if i + 1 < LIMBS { self.0[i + 1] } else { top };
            out[i] = (self.0[i] >> 1) | (hi << 31);
        }
        U256(out)
    }

    /// Shift right by one bit
    pub fn shr1(&self) -> Self {
        self.shr1_with_top(0)
    }

    /// Split a 512-bit value into its low and high halves
    pub(crate) fn split_wide(wide: &[u32; 2 * LIMBS]) -> (Self, Self) {
        let mut lo = [0u32; LIMBS];
        let mut hi = [0u32; LIMBS];
        lo.copy_from_slice(&wide[..LIMBS]);
        hi.copy_from_slice(&wide[LIMBS..]);
        (U256(lo), U256(hi))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for U256 {
    fn from(n: u32) -> Self {
        U256::from_u32(n)
    }
}
