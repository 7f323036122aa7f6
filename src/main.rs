use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xvalues::cli::Cli;
use xvalues::commands;

fn main() -> ExitCode {
    let cli = Cli::parse_args(std::env::args_os());
    init_logging(cli.verbose);

    let stdout = io::stdout();
    match commands::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.error_code())
        }
    }
}

// Diagnostics go to stderr so stdout carries only formatted values.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
