//! Modular arithmetic over a 256-bit odd modulus

use super::u256::{U256, LIMBS};
use crate::error::{Error, Result};

/// An odd modulus `m` with `2^255 < m < 2^256`
///
/// Products are reduced by folding: with `c = 2^256 - m`, a 512-bit value
/// `lo + hi * 2^256` is congruent to `lo + hi * c`. Folding repeats until
/// the high half vanishes and one conditional subtraction finishes the job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    m: U256,
    c: U256,
}

impl Modulus {
    /// Create a modulus
    pub const fn new(m: U256) -> Self {
        Modulus {
            m,
            c: m.wrapping_neg(),
        }
    }

    /// The modulus value
    pub fn value(&self) -> &U256 {
        &self.m
    }

    /// Reduce a 256-bit value into `[0, m)`
    pub fn reduce(&self, a: &U256) -> U256 {
        let mut r = *a;
        while r >= self.m {
            r = r.sbb(&self.m).0;
        }
        r
    }

    /// Reduce a 512-bit value into `[0, m)`
    pub fn reduce_wide(&self, wide: &[u32; 2 * LIMBS]) -> U256 {
        let (mut lo, mut hi) = U256::split_wide(wide);
        while !hi.is_zero() {
            let folded = hi.mul_wide(&self.c);
            let mut next = [0u32; 2 * LIMBS];
            let mut carry = 0u64;
            for i in 0..2 * LIMBS {
                let l = if i < LIMBS { lo.0[i] as u64 } else { 0 };
                let t = l + folded[i] as u64 + carry;
                next[i] = t as u32;
                carry = t >> 32;
            }
            let (l, h) = U256::split_wide(&next);
            lo = l;
            hi = h;
        }
        self.reduce(&lo)
    }

    /// `(a + b) mod m` for `a, b < m`
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        let (sum, carry) = a.adc(b);
        if carry == 1 || sum >= self.m {
            sum.sbb(&self.m).0
        } else {
            sum
        }
    }

    /// `(a - b) mod m` for `a, b < m`
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        let (diff, borrow) = a.sbb(b);
        if borrow == 1 {
            diff.adc(&self.m).0
        } else {
            diff
        }
    }

    /// `-a mod m` for `a < m`
    pub fn neg(&self, a: &U256) -> U256 {
        if a.is_zero() {
            U256::ZERO
        } else {
            self.m.sbb(a).0
        }
    }

    /// `(a * b) mod m`
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        self.reduce_wide(&a.mul_wide(b))
    }

    /// `a^2 mod m`
    pub fn square(&self, a: &U256) -> U256 {
        self.mul(a, a)
    }

    /// `base^exp mod m` by square-and-multiply from the least significant bit
    pub fn pow(&self, base: &U256, exp: &U256) -> U256 {
        let mut result = U256::ONE;
        let mut b = self.reduce(base);
        for i in 0..exp.bits() {
            if exp.bit(i) {
                result = self.mul(&result, &b);
            }
            b = self.square(&b);
        }
        result
    }

    /// `x / 2 mod m` for `x < m`
    fn half(&self, x: &U256) -> U256 {
        if x.is_odd() {
            let (sum, carry) = x.adc(&self.m);
            sum.shr1_with_top(carry)
        } else {
            x.shr1()
        }
    }

    /// Multiplicative inverse by the binary extended Euclidean algorithm
    ///
    /// Fails with [`Error::NoInverse`] when `a ≡ 0` or `gcd(a, m) != 1`.
    pub fn inverse(&self, a: &U256) -> Result<U256> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NoInverse {
                context: "modular inverse of zero",
            });
        }

        // Invariants: x1 * a ≡ u and x2 * a ≡ v (mod m)
        let mut u = a;
        let mut v = self.m;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;

        while u != U256::ONE && v != U256::ONE {
            if u.is_zero() || v.is_zero() {
                return Err(Error::NoInverse {
                    context: "modular inverse of non-coprime value",
                });
            }
            while u.is_even() {
                u = u.shr1();
                x1 = self.half(&x1);
            }
            while v.is_even() {
                v = v.shr1();
                x2 = self.half(&x2);
            }
            if u >= v {
                u = u.sbb(&v).0;
                x1 = self.sub(&x1, &x2);
            } else {
                v = v.sbb(&u).0;
                x2 = self.sub(&x2, &x1);
            }
        }

        Ok(if u == U256::ONE { x1 } else { x2 })
    }
}
