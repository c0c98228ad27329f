use project_euler::solutions::pe16::{BASE, EXPONENT, digit_sum_of_power};

fn main() {
    println!("{}", digit_sum_of_power(BASE, EXPONENT));
}
