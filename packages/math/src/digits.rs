use crate::BigUint;

/// Sum of the decimal digits of n.
///
/// Example: digit_sum(32768) = 3 + 2 + 7 + 6 + 8 = 26
pub fn digit_sum(mut n: u64) -> u64 {
    let mut accum = 0;
    while n >= 10 {
        accum += n % 10;
        n /= 10;
    }
    accum + n
}

/// Sum of the decimal digits of an arbitrary-precision integer.
///
/// Peels one digit per division by ten, so every digit is visited exactly once.
///
/// ```
/// use euler_math::{BigUint, big_digit_sum};
///
/// let n: BigUint = "3628800".parse().unwrap();
/// assert_eq!(big_digit_sum(&n), 27);
/// ```
pub fn big_digit_sum(n: &BigUint) -> u64 {
    let ten = BigUint::from_u32(10);
    let mut n = n.clone();
    let mut accum = 0;
    while n >= ten {
        let (q, r) = n.div_rem_small(10);
        accum += r as u64;
        n = q;
    }
    // n < 10, so the remainder is the leading digit itself
    let (rest, leading) = n.div_rem_small(10);
    debug_assert!(rest.is_zero());
    accum + leading as u64
}
