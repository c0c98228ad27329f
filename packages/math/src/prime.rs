//! Prime number utilities: a prime iterator, factorization and divisor counts.

/// Unbounded ascending stream of primes: 2, 3, 5, 7, ...
///
/// Every prime yielded so far is remembered, and a candidate is accepted
/// when none of the remembered primes not exceeding its square root divide it.
/// After 2 only odd candidates are tried.
///
/// # Example
///
/// ```
/// use euler_math::prime::Primes;
///
/// let first_ten: Vec<u64> = Primes::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            candidate: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidate;
            self.candidate = match candidate {
                2 => 3,
                _ => candidate.checked_add(2)?,
            };

            let composite = self
                .found
                .iter()
                .take_while(|&&p| p <= candidate / p)
                .any(|&p| candidate.is_multiple_of(p));

            if !composite {
                self.found.push(candidate);
                return Some(candidate);
            }
        }
    }
}

/// Factor n into primes by trial division.
///
/// Candidates run while `factor <= n / factor`, which stays in range for
/// every u64 including primes close to `u64::MAX`.
///
/// Returns `(prime, exponent)` pairs in ascending order of prime.
/// Zero and one have no prime factors.
///
/// # Example
///
/// ```
/// use euler_math::prime::prime_factors;
///
/// assert_eq!(prime_factors(360), vec![(2, 3), (3, 2), (5, 1)]);
/// assert_eq!(prime_factors(1), vec![]);
/// ```
pub fn prime_factors(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut factor = 2u64;
    while factor <= n / factor {
        let mut exp = 0;
        while n.is_multiple_of(factor) {
            exp += 1;
            n /= factor;
        }
        if exp > 0 {
            factors.push((factor, exp));
        }
        factor += if factor == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// Number of positive divisors of n, as the product of (exponent + 1)
/// over its prime factorization.
///
/// `divisor_count(0)` is 0.
///
/// # Example
///
/// ```
/// use euler_math::prime::divisor_count;
///
/// assert_eq!(divisor_count(28), 6); // 1, 2, 4, 7, 14, 28
/// assert_eq!(divisor_count(1), 1);
/// ```
pub fn divisor_count(n: u64) -> u32 {
    if n == 0 {
        return 0;
    }
    prime_factors(n).iter().map(|&(_, exp)| exp + 1).product()
}

/// Divisor count of n, factoring only against the supplied ascending prime table.
///
/// Faster than [`divisor_count`] when many values share one table, as in the
/// triangle number search.
///
/// # Panics
///
/// If `primes` is empty or its largest entry is below `floor(sqrt(n))`,
/// since a prime factor could then go unseen.
///
/// # Example
///
/// ```
/// use euler_math::prime::count_divisors;
///
/// let primes = vec![2, 3, 5, 7];
/// assert_eq!(count_divisors(28, &primes), 6); // 1, 2, 4, 7, 14, 28
/// assert_eq!(count_divisors(12, &primes), 6); // 1, 2, 3, 4, 6, 12
/// ```
pub fn count_divisors(mut n: u64, primes: &[u64]) -> u32 {
    if n <= 1 {
        return n as u32;
    }

    let root = n.isqrt();
    match primes.last() {
        Some(&largest) if largest >= root => {}
        Some(&largest) => panic!(
            "primes slice insufficient: largest prime {} below isqrt({}) = {}",
            largest, n, root
        ),
        None => panic!("primes slice insufficient: empty table for {}", n),
    }

    let mut count = 1u32;
    for &p in primes.iter() {
        if p > n / p {
            break;
        }
        let mut exp = 0;
        while n.is_multiple_of(p) {
            exp += 1;
            n /= p;
        }
        count *= exp + 1;
    }

    // leftover cofactor is prime
    if n > 1 {
        count *= 2;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_divisors(n: u64) -> u32 {
        (1..=n).filter(|d| n % d == 0).count() as u32
    }

    #[test]
    fn test_primes_iterator() {
        let first_ten: Vec<u64> = Primes::new().take(10).collect();
        assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_primes_iterator_thousandth() {
        assert_eq!(Primes::new().nth(999), Some(7919));
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(0), vec![]);
        assert_eq!(prime_factors(1), vec![]);
        assert_eq!(prime_factors(2), vec![(2, 1)]);
        assert_eq!(prime_factors(84), vec![(2, 2), (3, 1), (7, 1)]);
        assert_eq!(prime_factors(97), vec![(97, 1)]);
        assert_eq!(prime_factors(1024), vec![(2, 10)]);
        assert_eq!(
            prime_factors(600851475143),
            vec![(71, 1), (839, 1), (1471, 1), (6857, 1)]
        );
    }

    #[test]
    fn test_divisor_count() {
        assert_eq!(divisor_count(0), 0);
        assert_eq!(divisor_count(1), 1);
        assert_eq!(divisor_count(2), 2);
        assert_eq!(divisor_count(6), 4);
        assert_eq!(divisor_count(36), 9);
        assert_eq!(divisor_count(76576500), 576);
    }

    #[test]
    fn test_prime_factors_near_u64_max() {
        // largest prime below 2^64
        let p = 18_446_744_073_709_551_557;
        assert_eq!(prime_factors(p), vec![(p, 1)]);
        assert_eq!(divisor_count(p), 2);
        assert_eq!(
            prime_factors(u64::MAX),
            vec![(3, 1), (5, 1), (17, 1), (257, 1), (641, 1), (65537, 1), (6700417, 1)]
        );
    }

    #[test]
    fn test_primes_iterator_skips_even_candidates() {
        let primes: Vec<u64> = Primes::new().take_while(|&p| p < 100).collect();
        assert_eq!(primes.len(), 25);
        assert!(primes.iter().skip(1).all(|p| p % 2 == 1));
    }

    #[test]
    fn test_divisor_count_against_brute_force() {
        for n in 1..=2000 {
            assert_eq!(divisor_count(n), brute_force_divisors(n), "n = {}", n);
        }
    }

    #[test]
    fn test_count_divisors() {
        let primes: Vec<u64> = Primes::new().take(100).collect();
        assert_eq!(count_divisors(1, &primes), 1);
        assert_eq!(count_divisors(2, &primes), 2); // 1, 2
        assert_eq!(count_divisors(6, &primes), 4); // 1, 2, 3, 6
        assert_eq!(count_divisors(12, &primes), 6); // 1, 2, 3, 4, 6, 12
        assert_eq!(count_divisors(28, &primes), 6); // 1, 2, 4, 7, 14, 28
        assert_eq!(count_divisors(36, &primes), 9); // 1, 2, 3, 4, 6, 9, 12, 18, 36
    }

    #[test]
    fn test_count_divisors_agrees_with_factorization() {
        let primes: Vec<u64> = Primes::new().take(200).collect();
        for n in 1..=50_000 {
            assert_eq!(count_divisors(n, &primes), divisor_count(n), "n = {}", n);
        }
    }

    #[test]
    fn test_count_divisors_exact_square_boundary() {
        // sqrt(49) = 7, so primes up to 7 suffice
        assert_eq!(count_divisors(49, &[2, 3, 5, 7]), 3);
        // floor(sqrt(63)) = 7
        assert_eq!(count_divisors(63, &[2, 3, 5, 7]), 6);
    }

    #[test]
    #[should_panic(expected = "primes slice insufficient")]
    fn test_count_divisors_insufficient_primes() {
        let primes = vec![2, 3]; // sqrt(100) = 10, but max prime is 3
        count_divisors(100, &primes);
    }

    #[test]
    #[should_panic(expected = "empty table")]
    fn test_count_divisors_empty_table() {
        count_divisors(10, &[]);
    }
}
