//! # zkv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zkv_cli::encode::{run_encode, EncodeArgs};
use zkv_cli::verify::{run_verify, VerifyArgs};

/// Zero-knowledge proof verifier.
///
/// Verifies proofs against per-circuit verification keys and prints
/// canonical encodings of proof inputs.
#[derive(Parser, Debug)]
#[command(name = "zkv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a proof against a verification key.
    Verify(VerifyArgs),

    /// Print the canonical encoding of a proof and its public signals.
    Encode(EncodeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "zkv starting");

    let result = match cli.command {
        Commands::Verify(args) => run_verify(&args),
        Commands::Encode(args) => run_encode(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_belongs_to_verify() {
        let cli = Cli::try_parse_from([
            "zkv", "verify", "--circuit", "c", "--vk", "vk.json", "--proof", "p.json",
            "--signals", "s.json", "--config", "zkv.yaml",
        ])
        .unwrap();
        match cli.command {
            Commands::Verify(args) => {
                assert_eq!(args.config.as_deref(), Some(std::path::Path::new("zkv.yaml")))
            }
            other => panic!("expected verify, got {other:?}"),
        }
    }

    #[test]
    fn encode_rejects_config_flag() {
        let parsed = Cli::try_parse_from([
            "zkv", "encode", "--proof", "p.json", "--signals", "s.json", "--config", "zkv.yaml",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["zkv", "-vv", "encode", "--proof", "p", "--signals", "s"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
