//! PE12: Highly Divisible Triangular Number
//! Find the first triangle number with over five hundred divisors.

use euler_math::first_triangle_with_divisors_over;

pub const THRESHOLD: u32 = 500;

pub fn solve() -> String {
    first_triangle_with_divisors_over(THRESHOLD).to_string()
}
