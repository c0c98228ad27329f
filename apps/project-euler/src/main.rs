use anyhow::{Context, Result, bail};
use clap::Parser;
use project_euler::{PROBLEMS, run_problem};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Log intermediate values to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.all {
        for &id in PROBLEMS {
            let answer = run_problem(id)
                .with_context(|| format!("Problem {} is listed but has no solution", id))?;
            info!(problem = id, %answer, "solved");
            println!("The answer to Problem {} is: {}", id, answer);
        }
    } else if let Some(id) = cli.problem {
        let Some(answer) = run_problem(id) else {
            bail!("Problem {} not implemented (available: {:?})", id, PROBLEMS);
        };
        info!(problem = id, %answer, "solved");
        println!("The answer to Problem {} is: {}", id, answer);
    } else {
        bail!(
            "Usage: project-euler --problem <N> or --all\nAvailable problems: {:?}",
            PROBLEMS
        );
    }

    Ok(())
}
