//! # Circuit Identifier
//!
//! `CircuitId` names the statement a proof attests to (e.g. `transfer_v1`).
//! It is the unique key of the verification-key registry.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidCircuitId;

/// Maximum length of a circuit identifier, in bytes.
pub const MAX_CIRCUIT_ID_LEN: usize = 256;

/// Validated, caller-chosen identifier for a circuit.
///
/// # Invariants
///
/// - Non-empty.
/// - At most [`MAX_CIRCUIT_ID_LEN`] bytes.
/// - No whitespace and no control characters.
///
/// Deserialization goes through the same validation as [`CircuitId::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircuitId(String);

impl CircuitId {
    /// Validate and wrap a circuit identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCircuitId`] if the identifier is empty, too long,
    /// or contains whitespace or control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidCircuitId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidCircuitId::Empty);
        }
        if id.len() > MAX_CIRCUIT_ID_LEN {
            return Err(InvalidCircuitId::TooLong {
                len: id.len(),
                max: MAX_CIRCUIT_ID_LEN,
            });
        }
        if let Some(ch) = id.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidCircuitId::ForbiddenCharacter { id, ch });
        }
        Ok(Self(id))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CircuitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<CircuitId, _>` be queried with a plain `&str`.
impl Borrow<str> for CircuitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CircuitId {
    type Error = InvalidCircuitId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CircuitId {
    type Error = InvalidCircuitId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CircuitId> for String {
    fn from(id: CircuitId) -> Self {
        id.0
    }
}
