//! # Verifier Errors
//!
//! The ways a verification can fail to *run*. A proof that ran and was
//! rejected is not an error; it comes back as
//! [`VerificationResult`](crate::VerificationResult) with `accepted == false`.

use thiserror::Error;
use zkv_core::{EncodingError, InvalidCircuitId};

/// Error from the registry or the verifier facade.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// `load` was given an empty or malformed circuit identifier.
    #[error("invalid circuit id: {0}")]
    InvalidCircuitId(#[from] InvalidCircuitId),

    /// No verification key is registered for the circuit.
    #[error("no verification key registered for circuit {0:?}")]
    UnknownCircuit(String),

    /// The proof or public signals could not be canonically encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl VerifierError {
    /// Stable short label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCircuitId(_) => "invalid_circuit_id",
            Self::UnknownCircuit(_) => "unknown_circuit",
            Self::Encoding(_) => "encoding_error",
        }
    }
}
