//! # Encode Subcommand
//!
//! Prints the canonical (RFC 8785) encoding of a proof and its public
//! signals, and the SHA-256 digest of their concatenation. Useful for
//! checking that two producers agree on the bytes a strategy will see.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use zkv_core::{encode_statement, CanonicalBytes};
use zkv_verifier::PlaceholderStrategy;

/// Arguments for the `zkv encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the proof JSON.
    #[arg(long, value_name = "FILE")]
    pub proof: PathBuf,

    /// Path to the public signals JSON.
    #[arg(long, value_name = "FILE")]
    pub signals: PathBuf,
}

/// Output of `zkv encode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOutput {
    /// Canonical proof text.
    pub proof: String,
    /// Canonical public signals text.
    pub signals: String,
    /// `sha256:<hex>` over proof bytes followed by signal bytes.
    pub statement_digest: String,
}

/// Execute the encode subcommand.
pub fn run_encode(args: &EncodeArgs) -> Result<u8> {
    let output = encode_files(args)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(crate::EXIT_OK)
}

/// Read the inputs named by `args` and encode them.
pub fn encode_files(args: &EncodeArgs) -> Result<EncodeOutput> {
    let proof = crate::read_json(&args.proof)?;
    let signals = crate::read_json(&args.signals)?;
    let statement = encode_statement(&proof, &signals).context("cannot canonicalize inputs")?;
    let digest = PlaceholderStrategy::statement_digest(&statement.proof, &statement.signals);

    Ok(EncodeOutput {
        proof: as_text(&statement.proof)?,
        signals: as_text(&statement.signals)?,
        statement_digest: digest.to_string(),
    })
}

fn as_text(bytes: &CanonicalBytes) -> Result<String> {
    String::from_utf8(bytes.as_bytes().to_vec()).context("canonical encoding is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: &tempfile::TempDir, proof: &str, signals: &str) -> EncodeArgs {
        let p = dir.path().join("proof.json");
        let s = dir.path().join("signals.json");
        std::fs::write(&p, proof).unwrap();
        std::fs::write(&s, signals).unwrap();
        EncodeArgs { proof: p, signals: s }
    }

    #[test]
    fn sorts_keys_and_strips_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let out = encode_files(&args(&dir, r#"{ "b": 2, "a": [1, "x"] }"#, "[ \"7\" ]")).unwrap();
        assert_eq!(out.proof, r#"{"a":[1,"x"],"b":2}"#);
        assert_eq!(out.signals, r#"["7"]"#);
        assert!(out.statement_digest.starts_with("sha256:"));
    }

    #[test]
    fn empty_objects_have_known_digest() {
        let dir = tempfile::tempdir().unwrap();
        let out = encode_files(&args(&dir, "{}", "{}")).unwrap();
        assert_eq!(out.proof, "{}");
        assert_eq!(out.signals, "{}");
        // SHA-256("{}{}")
        let mut acc = zkv_core::Sha256Accumulator::new();
        acc.update(b"{}{}");
        assert_eq!(out.statement_digest, format!("sha256:{}", acc.finalize_hex()));
    }

    #[test]
    fn floats_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_files(&args(&dir, r#"{"x": 0.5}"#, "[]")).unwrap_err();
        assert!(format!("{err:#}").contains("canonicalize"));
    }
}
