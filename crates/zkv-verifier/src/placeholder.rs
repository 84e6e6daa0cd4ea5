//! # Placeholder Strategy (Non-Authoritative)
//!
//! A deterministic stand-in used to exercise the registry and facade
//! wiring. It is **not** a proof check.
//!
//! ## How It Works
//!
//! ```text
//! presented = SHA256( canonical(proof) || canonical(signals) )
//! expected  = SHA256( utf8(circuit_id) )
//! accepted  = presented == expected
//! ```
//!
//! The verification key never enters the comparison, so the outcome says
//! nothing about proof validity. For any realistic input the digests
//! differ and the verdict is a rejection.
//!
//! ## Security Warning
//!
//! The kind is [`StrategyKind::Placeholder`], which is non-authoritative.
//! [`ProofPolicy::production`](crate::policy::ProofPolicy::production)
//! refuses to build a verifier around it.

use zkv_core::{concat_encodings, CanonicalBytes, CircuitId, ContentDigest, Sha256Accumulator};

use crate::strategy::{StrategyKind, Verdict, VerificationStrategy};
use crate::types::VerificationKey;

/// Digest-comparison stand-in for a real proof check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStrategy;

impl PlaceholderStrategy {
    /// Create the placeholder strategy.
    pub fn new() -> Self {
        Self
    }

    /// `SHA256(proof || signals)`.
    pub fn statement_digest(proof: &CanonicalBytes, signals: &CanonicalBytes) -> ContentDigest {
        let mut acc = Sha256Accumulator::new();
        acc.update(&concat_encodings(proof, signals));
        acc.finalize()
    }

    /// `SHA256(circuit_id)` over the identifier's UTF-8 bytes.
    pub fn circuit_digest(circuit: &CircuitId) -> ContentDigest {
        let mut acc = Sha256Accumulator::new();
        acc.update(circuit.as_str().as_bytes());
        acc.finalize()
    }
}

impl VerificationStrategy for PlaceholderStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Placeholder
    }

    fn verify(
        &self,
        circuit: &CircuitId,
        _key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Verdict {
        let presented = Self::statement_digest(proof, signals);
        let expected = Self::circuit_digest(circuit);
        Verdict::from_check(presented.bytes == expected.bytes, || {
            format!(
                "placeholder digest mismatch: statement {} != circuit {}",
                presented.to_hex(),
                expected.to_hex()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(v: serde_json::Value) -> CanonicalBytes {
        CanonicalBytes::new(&v).unwrap()
    }

    fn cid(s: &str) -> CircuitId {
        CircuitId::new(s).unwrap()
    }

    #[test]
    fn circuit_digest_hashes_raw_identifier() {
        // SHA-256("abc"), FIPS 180-2 test vector.
        assert_eq!(
            PlaceholderStrategy::circuit_digest(&cid("abc")).to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn statement_digest_is_over_concatenation() {
        let mut acc = Sha256Accumulator::new();
        acc.update(b"{}{}");
        assert_eq!(
            PlaceholderStrategy::statement_digest(&encode(json!({})), &encode(json!({}))),
            acc.finalize()
        );
    }

    #[test]
    fn statement_digest_hashes_encoded_statement_concat() {
        let stmt = zkv_core::encode_statement(&json!({"a": 1}), &json!({"b": 2})).unwrap();
        let mut acc = Sha256Accumulator::new();
        acc.update(&stmt.concat());
        assert_eq!(
            PlaceholderStrategy::statement_digest(&stmt.proof, &stmt.signals),
            acc.finalize()
        );
        // Order matters: signals ++ proof is a different statement.
        assert_ne!(
            PlaceholderStrategy::statement_digest(&stmt.signals, &stmt.proof),
            PlaceholderStrategy::statement_digest(&stmt.proof, &stmt.signals)
        );
    }

    #[test]
    fn unrelated_inputs_are_rejected_with_reason() {
        let verdict = PlaceholderStrategy.verify(
            &cid("transfer_v1"),
            &VerificationKey::new(json!({"k": 1})),
            &encode(json!({"a": 1})),
            &encode(json!({"b": 2})),
        );
        assert!(!verdict.is_accepted());
        assert!(verdict.reason().unwrap().contains("placeholder digest mismatch"));
    }

    #[test]
    fn key_does_not_influence_the_verdict() {
        let proof = encode(json!({"pi_a": ["1", "2"]}));
        let signals = encode(json!(["7"]));
        let a = PlaceholderStrategy.verify(
            &cid("c"),
            &VerificationKey::new(json!({"k": 1})),
            &proof,
            &signals,
        );
        let b = PlaceholderStrategy.verify(
            &cid("c"),
            &VerificationKey::new(json!({"completely": "different"})),
            &proof,
            &signals,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn same_inputs_same_verdict() {
        let key = VerificationKey::new(json!({}));
        let run = || {
            PlaceholderStrategy.verify(
                &cid("transfer_v1"),
                &key,
                &encode(json!({"a": 1})),
                &encode(json!({"b": 2})),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn kind_is_placeholder() {
        assert_eq!(PlaceholderStrategy.kind(), StrategyKind::Placeholder);
        assert!(!PlaceholderStrategy.kind().is_authoritative());
    }
}
