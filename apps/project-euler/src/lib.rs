pub mod solutions;

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[12, 16, 20];

/// Run a specific problem and return the answer
pub fn run_problem(id: u32) -> Option<String> {
    match id {
        12 => Some(solutions::pe12::solve()),
        16 => Some(solutions::pe16::solve()),
        20 => Some(solutions::pe20::solve()),
        _ => None,
    }
}
