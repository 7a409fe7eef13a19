//! zcomp CLI
//!
//! Command-line interface for the zcomp zsh completion generator.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zcomp_cli::{Cli, Commands};
use zcomp_core::ZcompError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), ZcompError> {
    let cli = Cli::parse();
    let dump_path = cli.dump_path().to_string();

    // Initialize logging; stdout carries the script
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Source(cmd) => {
            cmd.execute(&dump_path)?;
        }
        Commands::Complete(cmd) => {
            cmd.execute(&dump_path)?;
        }
        Commands::Completion(cmd) => {
            cmd.execute()?;
        }
        Commands::Introspect(cmd) => {
            cmd.execute()?;
        }
    }

    Ok(())
}
