use clap::Parser;
use gauntlet::commands::verify;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(about = "Toolchain-aware verification run orchestrator", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the service directory
    #[arg(long)]
    service: PathBuf,

    /// Run deep verification (benchmarks, property tests)
    #[arg(long)]
    deep: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr behind RUST_LOG; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let report = verify::execute(&cli.service, cli.deep);

    match report.render() {
        Ok(body) => {
            println!("{body}");
            if report.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
