//! PE20: Factorial Digit Sum
//! Sum of the digits in 100!.

use euler_math::{big_digit_sum, big_factorial};
use tracing::debug;

pub const N: u32 = 100;

/// Sum of the decimal digits of m!.
pub fn digit_sum_of_factorial(m: u32) -> u64 {
    let result = big_factorial(m);
    debug!("{}! = {}", m, result);
    big_digit_sum(&result)
}

pub fn solve() -> String {
    digit_sum_of_factorial(N).to_string()
}
