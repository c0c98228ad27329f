use project_euler::solutions::pe20::{N, digit_sum_of_factorial};

fn main() {
    println!("{}", digit_sum_of_factorial(N));
}
