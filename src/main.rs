use rangemax::SolveError;
use std::io::Read;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read standard input: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Solve(#[from] SolveError),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i64, CliError> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;
    Ok(rangemax::run(&input)?)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(max) => {
            println!("{max}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
