//! # Verifier Configuration
//!
//! Settings the caller chooses when building a [`Verifier`](crate::Verifier).
//! Can be parsed from YAML or JSON text (JSON is valid YAML) or read from
//! the environment. File access is left to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::{PolicyMode, ProofPolicy, POLICY_ENV_VAR};

/// Environment variable controlling [`VerifierConfig::allow_empty_inputs`].
pub const ALLOW_EMPTY_ENV_VAR: &str = "ZKV_ALLOW_EMPTY_INPUTS";

/// Error while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid YAML/JSON for this schema.
    #[error("invalid verifier configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An environment variable holds a value that cannot be interpreted.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Name of the variable.
        var: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Verifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct VerifierConfig {
    /// Strategy policy mode. Defaults to the build-profile default.
    #[serde(default = "PolicyMode::build_default")]
    pub policy: PolicyMode,

    /// Whether empty proofs or signal sets (`null`, `{}`, `[]`, `""`) are
    /// passed to the strategy. When false they are rejected up front.
    #[serde(default = "default_allow_empty")]
    pub allow_empty_inputs: bool,
}

fn default_allow_empty() -> bool {
    true
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            policy: PolicyMode::build_default(),
            allow_empty_inputs: default_allow_empty(),
        }
    }
}

impl VerifierConfig {
    /// Parse configuration from YAML or JSON text. Missing fields take
    /// their defaults; unknown fields are an error.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read `ZKV_PROOF_POLICY` and `ZKV_ALLOW_EMPTY_INPUTS`, defaulting
    /// whatever is unset.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(val) = std::env::var(POLICY_ENV_VAR) {
            config.policy = PolicyMode::parse(&val).ok_or(ConfigError::InvalidEnv {
                var: POLICY_ENV_VAR,
                value: val,
            })?;
        }
        if let Ok(val) = std::env::var(ALLOW_EMPTY_ENV_VAR) {
            config.allow_empty_inputs = parse_bool(&val).ok_or(ConfigError::InvalidEnv {
                var: ALLOW_EMPTY_ENV_VAR,
                value: val,
            })?;
        }
        Ok(config)
    }

    /// The strategy policy this configuration selects.
    pub fn proof_policy(&self) -> ProofPolicy {
        ProofPolicy::new(self.policy)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
