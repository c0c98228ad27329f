use tracing::debug;

use crate::prime::{Primes, count_divisors};

/// Iterator that yields triangle numbers: 1, 3, 6, 10, 15, ...
///
/// Each term is the previous one plus its index, T(k) = T(k-1) + k.
///
/// ```
/// use euler_math::sequence::TriangleNumbers;
///
/// let first: Vec<u64> = TriangleNumbers::new().take(5).collect();
/// assert_eq!(first, vec![1, 3, 6, 10, 15]);
/// ```
pub struct TriangleNumbers {
    n: u64,
    current: u64,
}

impl TriangleNumbers {
    pub fn new() -> Self {
        Self { n: 0, current: 0 }
    }
}

impl Default for TriangleNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TriangleNumbers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.n += 1;
        self.current = self.current.checked_add(self.n)?;
        Some(self.current)
    }
}

/// The k-th triangle number, k(k+1)/2, or None if it does not fit in a u64.
///
/// ```
/// use euler_math::sequence::triangle_number;
///
/// assert_eq!(triangle_number(7), Some(28));
/// assert_eq!(triangle_number(u64::MAX), None);
/// ```
pub fn triangle_number(k: u64) -> Option<u64> {
    // halve whichever of k, k + 1 is even before multiplying
    if k.is_multiple_of(2) {
        (k / 2).checked_mul(k.checked_add(1)?)
    } else {
        (k / 2 + 1).checked_mul(k)
    }
}

/// Find the first triangle number with strictly more than `threshold` divisors.
///
/// Walks the triangle numbers in increasing order, so the first hit is also
/// the smallest. The prime table used for factoring grows lazily to cover
/// the square root of the current term.
///
/// # Example
///
/// ```
/// use euler_math::sequence::first_triangle_with_divisors_over;
///
/// // T(7) = 28 has divisors 1, 2, 4, 7, 14, 28
/// assert_eq!(first_triangle_with_divisors_over(5), 28);
/// ```
pub fn first_triangle_with_divisors_over(threshold: u32) -> u64 {
    let mut primes: Vec<u64> = Vec::new();
    let mut prime_iter = Primes::new();
    let near_miss = threshold - threshold / 5;

    for (i, t) in TriangleNumbers::new().enumerate() {
        let sqrt_t = t.isqrt();
        while primes.last().map_or(true, |&p| p < sqrt_t) {
            primes.push(prime_iter.next().expect("prime iterator is infinite"));
        }

        let divisors = count_divisors(t, &primes);

        if divisors > near_miss {
            debug!(k = i + 1, t, divisors, "triangle number near threshold");
        }

        if divisors > threshold {
            return t;
        }
    }

    unreachable!("triangle numbers overflowed u64 before exceeding {threshold} divisors")
}
