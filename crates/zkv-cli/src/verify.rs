//! # Verify Subcommand
//!
//! Loads one verification key into a fresh registry, verifies one proof
//! against it and prints the `VerificationResult` as JSON on stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use zkv_verifier::{
    KeyRegistry, PlaceholderStrategy, Proof, PublicSignals, VerificationKey, VerificationResult,
    Verifier, VerifierConfig,
};

/// Strategy selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyChoice {
    /// SHA-256 digest comparison. Refused in production mode.
    Placeholder,
    /// Groth16 over BN254. Requires the `groth16` feature.
    Groth16,
}

/// Arguments for the `zkv verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Circuit identifier the key is registered under.
    #[arg(long)]
    pub circuit: String,

    /// Path to the verification key JSON.
    #[arg(long, value_name = "FILE")]
    pub vk: PathBuf,

    /// Path to the proof JSON.
    #[arg(long, value_name = "FILE")]
    pub proof: PathBuf,

    /// Path to the public signals JSON.
    #[arg(long, value_name = "FILE")]
    pub signals: PathBuf,

    /// Verification strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::Placeholder)]
    pub strategy: StrategyChoice,

    /// Path to a YAML or JSON verifier configuration file. Without it,
    /// settings come from ZKV_PROOF_POLICY and ZKV_ALLOW_EMPTY_INPUTS.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Execute the verify subcommand. Returns the process exit code.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let result = verify_files(args)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(if result.accepted {
        crate::EXIT_OK
    } else {
        crate::EXIT_REJECTED
    })
}

/// Read the inputs named by `args` and run one verification.
pub fn verify_files(args: &VerifyArgs) -> Result<VerificationResult> {
    let config = crate::load_config(args.config.as_deref())?;
    let key = VerificationKey::new(crate::read_json(&args.vk)?);
    let proof = Proof::new(crate::read_json(&args.proof)?);
    let signals = PublicSignals::new(crate::read_json(&args.signals)?);

    let verifier = build_verifier(args.strategy, &config)?;
    verifier
        .load_verification_key(&args.circuit, key)
        .with_context(|| format!("cannot register key for circuit {:?}", args.circuit))?;

    tracing::debug!(circuit_id = %args.circuit, strategy = %verifier.strategy_kind(), "running verification");
    verifier
        .verify_proof(&args.circuit, &proof, &signals)
        .context("verification could not run")
}

fn build_verifier(choice: StrategyChoice, config: &VerifierConfig) -> Result<Verifier> {
    let registry = Arc::new(KeyRegistry::new());
    let verifier = match choice {
        StrategyChoice::Placeholder => Verifier::with_config(registry, PlaceholderStrategy, config)?,
        StrategyChoice::Groth16 => groth16_verifier(registry, config)?,
    };
    Ok(verifier)
}

#[cfg(feature = "groth16")]
fn groth16_verifier(registry: Arc<KeyRegistry>, config: &VerifierConfig) -> Result<Verifier> {
    Ok(Verifier::with_config(
        registry,
        zkv_verifier::Groth16Strategy,
        config,
    )?)
}

#[cfg(not(feature = "groth16"))]
fn groth16_verifier(_registry: Arc<KeyRegistry>, _config: &VerifierConfig) -> Result<Verifier> {
    anyhow::bail!("zkv was built without the `groth16` feature")
}
