//! # zkv-cli: Command-Line Caller for the Verifier
//!
//! Provides the `zkv` binary. The library crates never touch the
//! filesystem; this crate reads the JSON inputs and configuration files
//! and hands values to them.
//!
//! ## Subcommands
//!
//! - `zkv verify`: load a key, verify a proof, print the result.
//! - `zkv encode`: print the canonical encoding of a proof and its
//!   public signals, with the statement digest.
//!
//! ```bash
//! zkv verify --circuit transfer_v1 --vk vk.json --proof proof.json --signals public.json
//! zkv verify --config zkv.yaml --strategy groth16 ...
//! zkv encode --proof proof.json --signals public.json
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | proof accepted / command succeeded |
//! | 1 | the command could not run |
//! | 2 | proof rejected |

pub mod encode;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use zkv_verifier::VerifierConfig;

/// Exit code for an accepted proof or a successful command.
pub const EXIT_OK: u8 = 0;

/// Exit code for a proof that was checked and rejected.
pub const EXIT_REJECTED: u8 = 2;

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}

/// Load verifier configuration from `path`, or from the environment when
/// no path is given.
pub fn load_config(path: Option<&Path>) -> Result<VerifierConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            VerifierConfig::from_yaml_str(&text)
                .with_context(|| format!("invalid config: {}", path.display()))
        }
        None => VerifierConfig::from_environment().context("invalid environment configuration"),
    }
}
