//! # Verifier Facade
//!
//! Orchestrates one verification:
//!
//! 1. Resolve the key from the [`KeyRegistry`]. A missing key fails with
//!    [`VerifierError::UnknownCircuit`] before any other work.
//! 2. Canonically encode the proof and public signals. Failure is
//!    [`VerifierError::Encoding`].
//! 3. Apply the empty-input rule from [`VerifierConfig`].
//! 4. Delegate to the active [`VerificationStrategy`].
//! 5. Emit a [`VerificationEvent`] and return a [`VerificationResult`].
//!
//! Verification is a pure decision: nothing is retried.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use zkv_core::{encode_statement, CircuitId, Timestamp};

use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::events::{EventSink, TracingEventSink, VerificationEvent, VerifierMetrics};
use crate::policy::{PolicyError, ProofPolicy};
use crate::registry::KeyRegistry;
use crate::strategy::{StrategyKind, Verdict, VerificationStrategy};
use crate::types::{Proof, PublicSignals, VerificationKey};

/// The outcome of a verification that ran.
///
/// `accepted == false` means the proof was checked and did not hold; it
/// is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// The circuit the proof was checked against.
    pub circuit_id: CircuitId,
    /// Whether the proof was accepted.
    pub accepted: bool,
    /// Diagnostic for a rejection; `None` on acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The strategy that produced the verdict.
    pub strategy: StrategyKind,
}

/// Proof verifier: a key registry, an active strategy and an event sink.
///
/// `Verifier` is `Send + Sync`; share it behind an `Arc` and call
/// [`Verifier::verify_proof`] from as many threads as needed.
pub struct Verifier {
    registry: Arc<KeyRegistry>,
    strategy: Box<dyn VerificationStrategy>,
    sink: Box<dyn EventSink>,
    metrics: VerifierMetrics,
    allow_empty_inputs: bool,
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("circuits", &self.registry.len())
            .field("strategy", &self.strategy.kind())
            .field("metrics", &self.metrics)
            .field("allow_empty_inputs", &self.allow_empty_inputs)
            .finish_non_exhaustive()
    }
}

impl Verifier {
    /// Build a verifier around `strategy`, checked against `policy`.
    ///
    /// Events go to [`TracingEventSink`] and empty inputs are passed to
    /// the strategy; see [`Verifier::with_event_sink`] and
    /// [`Verifier::with_allow_empty_inputs`].
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::PlaceholderRejected`] if the policy refuses
    /// the strategy's kind.
    pub fn new(
        registry: Arc<KeyRegistry>,
        strategy: impl VerificationStrategy + 'static,
        policy: ProofPolicy,
    ) -> Result<Self, PolicyError> {
        let kind = strategy.kind();
        if let Err(e) = policy.validate(kind) {
            tracing::error!(strategy = %kind, mode = ?policy.mode(), error = %e, "strategy refused by policy");
            return Err(e);
        }
        if !kind.is_authoritative() {
            tracing::warn!(
                strategy = %kind,
                "verifier built on a non-authoritative strategy; verdicts carry no cryptographic meaning"
            );
        }
        Ok(Self {
            registry,
            strategy: Box::new(strategy),
            sink: Box::new(TracingEventSink),
            metrics: VerifierMetrics::new(),
            allow_empty_inputs: true,
        })
    }

    /// Build a verifier from a [`VerifierConfig`].
    pub fn with_config(
        registry: Arc<KeyRegistry>,
        strategy: impl VerificationStrategy + 'static,
        config: &VerifierConfig,
    ) -> Result<Self, PolicyError> {
        Ok(Self::new(registry, strategy, config.proof_policy())?
            .with_allow_empty_inputs(config.allow_empty_inputs))
    }

    /// Replace the event sink.
    pub fn with_event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Choose whether empty proofs or signal sets reach the strategy.
    pub fn with_allow_empty_inputs(mut self, allow: bool) -> Self {
        self.allow_empty_inputs = allow;
        self
    }

    /// The registry this verifier reads keys from.
    pub fn registry(&self) -> &Arc<KeyRegistry> {
        &self.registry
    }

    /// Verification counters.
    pub fn metrics(&self) -> &VerifierMetrics {
        &self.metrics
    }

    /// Kind of the active strategy.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Register (or replace) the verification key for a circuit.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::InvalidCircuitId`] for an empty or
    /// malformed identifier.
    pub fn load_verification_key(
        &self,
        circuit_id: &str,
        key: VerificationKey,
    ) -> Result<(), VerifierError> {
        self.registry.load(circuit_id, key)
    }

    /// Verify `proof` and `signals` against the key for `circuit_id`.
    ///
    /// # Errors
    ///
    /// - [`VerifierError::UnknownCircuit`] if no key is registered. The
    ///   strategy is not invoked.
    /// - [`VerifierError::Encoding`] if either value cannot be canonically
    ///   encoded.
    pub fn verify_proof(
        &self,
        circuit_id: &str,
        proof: &Proof,
        signals: &PublicSignals,
    ) -> Result<VerificationResult, VerifierError> {
        let kind = self.strategy.kind();
        tracing::debug!(circuit_id, strategy = %kind, "verifying proof");

        let (circuit, key) = self
            .registry
            .resolve(circuit_id)
            .map_err(|e| self.could_not_run(circuit_id, e))?;

        let statement = encode_statement(proof, signals)
            .map_err(|e| self.could_not_run(circuit_id, e.into()))?;

        let verdict = if let Some(reason) = self.empty_input_rejection(proof, signals) {
            Verdict::Reject(reason)
        } else {
            self.strategy
                .verify(&circuit, &key, &statement.proof, &statement.signals)
        };

        let accepted = verdict.is_accepted();
        self.metrics.record_verdict(accepted);
        self.sink.emit(&VerificationEvent {
            circuit_id: circuit.clone(),
            accepted,
            strategy: kind,
            timestamp: Timestamp::now(),
        });

        Ok(VerificationResult {
            circuit_id: circuit,
            accepted,
            reason: match verdict {
                Verdict::Accept => None,
                Verdict::Reject(reason) => Some(reason),
            },
            strategy: kind,
        })
    }

    fn could_not_run(&self, circuit_id: &str, err: VerifierError) -> VerifierError {
        self.metrics.record_error();
        tracing::warn!(circuit_id, error = %err, kind = err.kind(), "verification could not run");
        err
    }

    fn empty_input_rejection(&self, proof: &Proof, signals: &PublicSignals) -> Option<String> {
        if self.allow_empty_inputs {
            return None;
        }
        if proof.is_empty() {
            Some("empty proof".to_string())
        } else if signals.is_empty() {
            Some("empty public signals".to_string())
        } else {
            None
        }
    }
}
