//! # Groth16 Strategy (Feature-Gated)
//!
//! Real Groth16 verification on the BN254 curve through arkworks. Compiled
//! only with the `groth16` Cargo feature.
//!
//! ## Properties
//!
//! - **Proof size:** constant (two G1 points, one G2 point).
//! - **Verification:** one multi-scalar multiplication over the public
//!   inputs plus a pairing-product check.
//! - **Trusted setup:** circuit-specific; the registry holds the resulting
//!   verifying key per circuit.
//!
//! ## Value Shapes
//!
//! | Value | Shape |
//! |-------|-------|
//! | verification key | `{"vk": "<hex>"}`: compressed `ark_groth16::VerifyingKey<Bn254>` |
//! | proof | `{"proof": "<hex>"}`: compressed `ark_groth16::Proof<Bn254>` |
//! | public signals | array of field elements, decimal strings or non-negative integers |
//!
//! Hex may carry a `0x` prefix. Extra fields in the key or proof objects
//! are ignored. Anything that does not decode is a rejection with a
//! diagnostic.

use std::str::FromStr;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof as ArkProof, VerifyingKey as ArkVerifyingKey};
use ark_serialize::CanonicalDeserialize;
use serde::Deserialize;
use serde_json::Value;
use zkv_core::{CanonicalBytes, CircuitId};

use crate::strategy::{StrategyKind, Verdict, VerificationStrategy};
use crate::types::VerificationKey;

#[derive(Deserialize)]
struct KeyEnvelope {
    vk: String,
}

#[derive(Deserialize)]
struct ProofEnvelope {
    proof: String,
}

/// Groth16 pairing check over BN254.
#[derive(Debug, Clone, Copy, Default)]
pub struct Groth16Strategy;

impl Groth16Strategy {
    /// Create the Groth16 strategy.
    pub fn new() -> Self {
        Self
    }

    fn prepare_key(key: &VerificationKey) -> Result<PreparedVerifyingKey<Bn254>, String> {
        let envelope: KeyEnvelope = serde_json::from_value(key.as_value().clone())
            .map_err(|e| format!("malformed verification key: {e}"))?;
        let bytes = decode_hex(&envelope.vk).map_err(|e| format!("malformed verification key: {e}"))?;
        let vk = ArkVerifyingKey::<Bn254>::deserialize_compressed(bytes.as_slice())
            .map_err(|e| format!("malformed verification key: {e}"))?;
        Ok(PreparedVerifyingKey::from(vk))
    }

    fn decode_proof(proof: &CanonicalBytes) -> Result<ArkProof<Bn254>, String> {
        let envelope: ProofEnvelope = serde_json::from_slice(proof.as_bytes())
            .map_err(|e| format!("malformed proof: {e}"))?;
        let bytes = decode_hex(&envelope.proof).map_err(|e| format!("malformed proof: {e}"))?;
        ArkProof::<Bn254>::deserialize_compressed(bytes.as_slice())
            .map_err(|e| format!("malformed proof: {e}"))
    }

    fn decode_signals(signals: &CanonicalBytes) -> Result<Vec<Fr>, String> {
        let values: Vec<Value> = serde_json::from_slice(signals.as_bytes())
            .map_err(|e| format!("public signals must be an array: {e}"))?;
        values
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Fr::from_str(s)
                    .map_err(|_| format!("public signal {i} is not a field element: {s:?}")),
                Value::Number(n) => n
                    .as_u64()
                    .map(Fr::from)
                    .ok_or_else(|| format!("public signal {i} is not a non-negative integer: {n}")),
                other => Err(format!("public signal {i} has unsupported type: {other}")),
            })
            .collect()
    }

    fn check(
        key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Result<bool, String> {
        let pvk = Self::prepare_key(key)?;
        let proof = Self::decode_proof(proof)?;
        let inputs = Self::decode_signals(signals)?;

        let expected = pvk.vk.gamma_abc_g1.len().saturating_sub(1);
        if inputs.len() != expected {
            return Err(format!(
                "expected {expected} public signals for this key, got {}",
                inputs.len()
            ));
        }

        Groth16::<Bn254>::verify_proof(&pvk, &proof, &inputs)
            .map_err(|e| format!("pairing check could not run: {e}"))
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

impl VerificationStrategy for Groth16Strategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Groth16
    }

    fn verify(
        &self,
        circuit: &CircuitId,
        key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Verdict {
        match Self::check(key, proof, signals) {
            Ok(true) => Verdict::Accept,
            Ok(false) => Verdict::Reject("groth16 pairing check failed".to_string()),
            Err(reason) => {
                tracing::debug!(circuit_id = %circuit, %reason, "groth16 inputs did not decode");
                Verdict::Reject(reason)
            }
        }
    }
}
