use crate::BigUint;

/// Compute factorial of n (n!)
///
/// Overflows for n > 20.
pub fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute factorial of n (n!) as BigUint for arbitrary precision
pub fn big_factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * i)
}
