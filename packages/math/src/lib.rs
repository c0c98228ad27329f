pub mod bigint;
pub mod digits;
pub mod error;
pub mod factorial;
pub mod prime;
pub mod sequence;

pub use bigint::BigUint;
pub use digits::{big_digit_sum, digit_sum};
pub use error::{MathError, Result};
pub use factorial::{big_factorial, factorial};
pub use prime::{Primes, count_divisors, divisor_count, prime_factors};
pub use sequence::{TriangleNumbers, first_triangle_with_divisors_over, triangle_number};
