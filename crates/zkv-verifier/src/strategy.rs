//! # Verification Strategy Trait
//!
//! The substitution point between the verifier plumbing and the actual
//! cryptographic check. The facade owns a `Box<dyn VerificationStrategy>`
//! and never knows which proving system sits behind it.
//!
//! ## Contract
//!
//! - `verify` is pure with respect to its inputs: it may allocate scratch
//!   state but must not mutate the key or the encodings, and identical
//!   inputs give identical verdicts.
//! - Empty encodings are not an error at this layer; the strategy still
//!   runs deterministically.
//! - Malformed inputs the strategy cannot interpret are a rejection with a
//!   diagnostic, never a panic.
//!
//! ## Authority
//!
//! Every strategy reports a [`StrategyKind`]. Only kinds for which
//! [`StrategyKind::is_authoritative`] holds perform a real proof check;
//! the [`ProofPolicy`](crate::policy::ProofPolicy) refuses the rest in
//! production.

use serde::{Deserialize, Serialize};
use zkv_core::{CanonicalBytes, CircuitId};

use crate::types::VerificationKey;

/// Which family of check a strategy performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Digest comparison stand-in. No cryptographic meaning.
    Placeholder,
    /// Groth16 pairing check over BN254.
    Groth16,
}

impl StrategyKind {
    /// Whether this kind performs a real proof check.
    pub fn is_authoritative(self) -> bool {
        matches!(self, StrategyKind::Groth16)
    }

    /// Stable name used in logs, events and results.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Placeholder => "placeholder-sha256",
            StrategyKind::Groth16 => "groth16-bn254",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy's decision on one proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The proof holds for the key and public signals.
    Accept,
    /// The proof does not hold; carries a diagnostic.
    Reject(String),
}

impl Verdict {
    /// True for [`Verdict::Accept`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    /// The rejection diagnostic, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(reason) => Some(reason),
        }
    }

    /// `Accept` when `holds`, otherwise `Reject(reason())`.
    pub fn from_check(holds: bool, reason: impl FnOnce() -> String) -> Self {
        if holds {
            Verdict::Accept
        } else {
            Verdict::Reject(reason())
        }
    }
}

/// A proof-checking procedure for one proving system.
///
/// Implementations must be `Send + Sync`: a single verifier instance is
/// shared across threads and verifications for distinct circuits run in
/// parallel without coordination.
pub trait VerificationStrategy: Send + Sync {
    /// The family of check this strategy performs.
    fn kind(&self) -> StrategyKind;

    /// Decide whether `proof` holds for `key` and `signals`.
    ///
    /// `circuit` identifies the statement; `proof` and `signals` are the
    /// canonical encodings produced by the facade.
    fn verify(
        &self,
        circuit: &CircuitId,
        key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Verdict;
}

impl<S: VerificationStrategy + ?Sized> VerificationStrategy for Box<S> {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn verify(
        &self,
        circuit: &CircuitId,
        key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Verdict {
        (**self).verify(circuit, key, proof, signals)
    }
}

impl<S: VerificationStrategy + ?Sized> VerificationStrategy for std::sync::Arc<S> {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn verify(
        &self,
        circuit: &CircuitId,
        key: &VerificationKey,
        proof: &CanonicalBytes,
        signals: &CanonicalBytes,
    ) -> Verdict {
        (**self).verify(circuit, key, proof, signals)
    }
}
