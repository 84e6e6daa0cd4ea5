//! # zkv-verifier: Proof Verification
//!
//! Accepts a proof and its public signals for a named circuit and decides
//! whether the proof holds, using the verification key registered for
//! that circuit.
//!
//! ## Architecture
//!
//! - **Registry** (`registry.rs`): `KeyRegistry` maps `CircuitId` to a
//!   verification key. Concurrent readers, last-write-wins loads.
//!
//! - **Strategy** (`strategy.rs`): the `VerificationStrategy` trait is the
//!   one place a proving system plugs in. The facade depends only on the
//!   trait.
//!
//! - **Placeholder** (`placeholder.rs`): `PlaceholderStrategy` compares
//!   SHA-256 digests. It is non-authoritative and refused by
//!   `ProofPolicy` in production mode.
//!
//! - **Facade** (`verifier.rs`): `Verifier::verify_proof` resolves the
//!   key, canonically encodes the inputs, delegates to the strategy and
//!   reports the outcome through an `EventSink` and `VerifierMetrics`.
//!
//! ## Feature-Gated Backends
//!
//! - `groth16`: `Groth16Strategy`, a real pairing check over BN254 via
//!   `ark-groth16`.
//!
//! ## Crate Policy
//!
//! - Depends on `zkv-core` only, internally.
//! - No I/O: keys, proofs and configuration arrive as values.
//! - Verification keys and proofs stay opaque outside the strategy that
//!   interprets them.

pub mod config;
pub mod error;
pub mod events;
#[cfg(feature = "groth16")]
pub mod groth16;
pub mod placeholder;
pub mod policy;
pub mod registry;
pub mod strategy;
pub mod types;
pub mod verifier;

pub use config::{ConfigError, VerifierConfig};
pub use error::VerifierError;
pub use events::{EventSink, NullEventSink, TracingEventSink, VerificationEvent, VerifierMetrics};
#[cfg(feature = "groth16")]
pub use groth16::Groth16Strategy;
pub use placeholder::PlaceholderStrategy;
pub use policy::{PolicyError, PolicyMode, ProofPolicy};
pub use registry::KeyRegistry;
pub use strategy::{StrategyKind, Verdict, VerificationStrategy};
pub use types::{Proof, PublicSignals, VerificationKey};
pub use verifier::{VerificationResult, Verifier};
