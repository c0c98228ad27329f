use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::{MathError, Result};

const BASE: u64 = 1_000_000_000;
const LIMB_DIGITS: usize = 9;

/// An arbitrary-precision non-negative integer.
///
/// Stored as base-10^9 limbs, least significant first. Zero is the empty
/// limb vector and no other value carries a most significant zero limb.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    /// Create a BigUint representing zero.
    pub fn zero() -> Self {
        BigUint { limbs: Vec::new() }
    }

    /// Create a BigUint representing one.
    pub fn one() -> Self {
        BigUint::from_u32(1)
    }

    /// Create a BigUint from a u32.
    pub fn from_u32(n: u32) -> Self {
        BigUint::from_u64(n as u64)
    }

    /// Create a BigUint from a u64.
    pub fn from_u64(mut n: u64) -> Self {
        let mut limbs = Vec::new();
        while n > 0 {
            limbs.push((n % BASE) as u32);
            n /= BASE;
        }
        BigUint { limbs }
    }

    fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        BigUint { limbs }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns the value as a u64, or None if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.limbs
            .iter()
            .rev()
            .try_fold(0u64, |acc, &limb| acc.checked_mul(BASE)?.checked_add(limb as u64))
    }

    /// Raise self to the power `exp` by repeated squaring.
    ///
    /// ```
    /// use euler_math::BigUint;
    ///
    /// assert_eq!(BigUint::from_u32(2).pow(15).to_string(), "32768");
    /// assert_eq!(BigUint::from_u32(7).pow(0).to_string(), "1");
    /// ```
    pub fn pow(&self, mut exp: u32) -> BigUint {
        let mut result = BigUint::one();
        let mut square = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &square;
            }
            exp >>= 1;
            if exp > 0 {
                square = &square * &square;
            }
        }
        result
    }

    /// Divide by a small divisor, returning `(quotient, remainder)`.
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem_small(&self, divisor: u32) -> (BigUint, u32) {
        assert!(divisor != 0, "attempt to divide BigUint by zero");
        let divisor = divisor as u64;
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut rem = 0u64;
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            let cur = rem * BASE + limb as u64;
            quotient[i] = (cur / divisor) as u32;
            rem = cur % divisor;
        }
        (BigUint::from_limbs(quotient), rem as u32)
    }
}

impl FromStr for BigUint {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(MathError::Empty);
        }
        if let Some((position, ch)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(MathError::InvalidDigit { ch, position });
        }

        let bytes = s.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / LIMB_DIGITS + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(LIMB_DIGITS);
            let limb = bytes[start..end]
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
            limbs.push(limb);
            end = start;
        }
        Ok(BigUint::from_limbs(limbs))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BigUint {
    type Output = BigUint;

    fn add(self, other: BigUint) -> BigUint {
        &self + &other
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        let max_len = self.limbs.len().max(other.limbs.len());
        let mut result = Vec::with_capacity(max_len + 1);
        let mut carry = 0u64;

        for i in 0..max_len {
            let a = self.limbs.get(i).copied().unwrap_or(0) as u64;
            let b = other.limbs.get(i).copied().unwrap_or(0) as u64;
            let sum = a + b + carry;
            result.push((sum % BASE) as u32);
            carry = sum / BASE;
        }

        if carry > 0 {
            result.push(carry as u32);
        }

        BigUint::from_limbs(result)
    }
}

impl Mul<u32> for BigUint {
    type Output = BigUint;

    fn mul(self, other: u32) -> BigUint {
        &self * other
    }
}

impl Mul<u32> for &BigUint {
    type Output = BigUint;

    fn mul(self, other: u32) -> BigUint {
        let mut result = Vec::with_capacity(self.limbs.len() + 1);
        let mut carry = 0u64;

        for &limb in &self.limbs {
            let product = limb as u64 * other as u64 + carry;
            result.push((product % BASE) as u32);
            carry = product / BASE;
        }

        while carry > 0 {
            result.push((carry % BASE) as u32);
            carry /= BASE;
        }

        BigUint::from_limbs(result)
    }
}

impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, other: BigUint) -> BigUint {
        &self * &other
    }
}

impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }

        let mut result = vec![0u32; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                // Fits in u64: (B-1) + (B-1)^2 + (B-1) = B^2 - 1.
                let cur = result[i + j] as u64 + a as u64 * b as u64 + carry;
                result[i + j] = (cur % BASE) as u32;
                carry = cur / BASE;
            }
            result[i + other.limbs.len()] = carry as u32;
        }

        BigUint::from_limbs(result)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((most, rest)) = self.limbs.split_last() else {
            return write!(f, "0");
        };
        write!(f, "{}", most)?;
        for limb in rest.iter().rev() {
            write!(f, "{:09}", limb)?;
        }
        Ok(())
    }
}
