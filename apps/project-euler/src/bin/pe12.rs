use euler_math::first_triangle_with_divisors_over;
use project_euler::solutions::pe12::THRESHOLD;

fn main() {
    println!("{}", first_triangle_with_divisors_over(THRESHOLD));
}
