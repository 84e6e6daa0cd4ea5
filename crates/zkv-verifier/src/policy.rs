//! # Strategy Policy
//!
//! Decides whether a verification strategy may back a verifier in the
//! current deployment.
//!
//! The placeholder strategy compares digests and has no cryptographic
//! meaning. If a production verifier were wired to it, anyone could
//! "prove" anything the digest happens to match. In [`PolicyMode::Production`]
//! a non-authoritative strategy is refused at verifier construction.
//!
//! ## Mode Selection
//!
//! 1. Explicit construction (`ProofPolicy::production()`, `::development()`).
//! 2. [`VerifierConfig`](crate::VerifierConfig), from a file or from the
//!    `ZKV_PROOF_POLICY` environment variable (`production`/`prod`,
//!    `development`/`dev`). An unrecognised value is a configuration error.
//! 3. Build profile: release builds default to `Production`, debug builds
//!    to `Development`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::StrategyKind;

/// Environment variable that selects the policy mode.
pub const POLICY_ENV_VAR: &str = "ZKV_PROOF_POLICY";

/// Errors from policy enforcement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A non-authoritative strategy was offered in production mode.
    #[error("strategy {strategy} rejected: production mode requires an authoritative proof check")]
    PlaceholderRejected {
        /// Name of the rejected strategy.
        strategy: String,
    },
}

/// Policy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    /// Refuse non-authoritative strategies.
    Production,
    /// Accept any strategy (local development and tests).
    Development,
}

impl PolicyMode {
    /// Parse a mode name as accepted by [`POLICY_ENV_VAR`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }

    /// The build-profile default: `Production` unless debug assertions are on.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Runtime policy checked when a verifier is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofPolicy {
    mode: PolicyMode,
}

impl ProofPolicy {
    /// Create a policy with the given mode.
    pub fn new(mode: PolicyMode) -> Self {
        Self { mode }
    }

    /// Production policy (refuses the placeholder).
    pub fn production() -> Self {
        Self::new(PolicyMode::Production)
    }

    /// Development policy (accepts any strategy).
    pub fn development() -> Self {
        Self::new(PolicyMode::Development)
    }

    /// Check whether `kind` may back a verifier under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::PlaceholderRejected`] for a non-authoritative
    /// kind in production mode.
    pub fn validate(&self, kind: StrategyKind) -> Result<(), PolicyError> {
        match self.mode {
            PolicyMode::Production if !kind.is_authoritative() => {
                Err(PolicyError::PlaceholderRejected {
                    strategy: kind.name().to_string(),
                })
            }
            PolicyMode::Production | PolicyMode::Development => Ok(()),
        }
    }

    /// Current policy mode.
    pub fn mode(&self) -> PolicyMode {
        self.mode
    }
}
