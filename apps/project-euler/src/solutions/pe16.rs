//! PE16: Power Digit Sum
//! Sum of the digits of 2^1000.

use euler_math::{BigUint, big_digit_sum};
use tracing::debug;

pub const BASE: u32 = 2;
pub const EXPONENT: u32 = 1000;

/// Sum of the decimal digits of base^exponent.
pub fn digit_sum_of_power(base: u32, exponent: u32) -> u64 {
    let n = BigUint::from_u32(base).pow(exponent);
    debug!("{}^{} = {}", base, exponent, n);
    big_digit_sum(&n)
}

pub fn solve() -> String {
    digit_sum_of_power(BASE, EXPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_power_digit_sum() {
        // 2^15 = 32768, digit sum = 3+2+7+6+8 = 26
        assert_eq!(digit_sum_of_power(2, 15), 26);
    }

    #[test]
    fn test_degenerate_powers() {
        assert_eq!(digit_sum_of_power(2, 0), 1);
        assert_eq!(digit_sum_of_power(0, 5), 0);
        assert_eq!(digit_sum_of_power(10, 50), 1);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "1366");
    }
}
