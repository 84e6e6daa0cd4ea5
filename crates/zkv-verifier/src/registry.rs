//! # Verification Key Registry
//!
//! Maps circuit identifiers to verification keys.
//!
//! ## Concurrency
//!
//! A single `parking_lot::RwLock` guards the map. `load` takes the write
//! lock for one `insert`, so a reader racing a replacement observes either
//! the old key or the new one, never a mix. Keys are stored behind `Arc`
//! and `get` hands out a clone of that `Arc`: no reference into the map
//! outlives the lock scope, and a verification in flight keeps using the
//! key it resolved even if the slot is replaced meanwhile.
//!
//! `parking_lot` locks do not poison, so a panicking thread cannot wedge
//! the registry for everyone else.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use zkv_core::CircuitId;

use crate::error::VerifierError;
use crate::types::VerificationKey;

/// Thread-safe registry of per-circuit verification keys.
///
/// Entries live until the registry is dropped or the circuit's key is
/// explicitly replaced; there is no expiry.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: RwLock<HashMap<CircuitId, Arc<VerificationKey>>>,
}

impl KeyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the key for `circuit_id`, replacing any previous key.
    ///
    /// Replacement is whole-value: nothing from the old key survives.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::InvalidCircuitId`] if the identifier is
    /// empty or malformed. The registry is left untouched in that case.
    pub fn load(&self, circuit_id: &str, key: VerificationKey) -> Result<(), VerifierError> {
        let id = CircuitId::new(circuit_id)?;
        let previous = self.keys.write().insert(id, Arc::new(key));
        if previous.is_some() {
            tracing::info!(circuit_id, replaced = true, "verification key replaced");
        } else {
            tracing::info!(circuit_id, "verification key loaded");
        }
        Ok(())
    }

    /// Fetch the key registered for `circuit_id`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::UnknownCircuit`] if no key is registered.
    pub fn get(&self, circuit_id: &str) -> Result<Arc<VerificationKey>, VerifierError> {
        self.keys
            .read()
            .get(circuit_id)
            .cloned()
            .ok_or_else(|| VerifierError::UnknownCircuit(circuit_id.to_string()))
    }

    /// Fetch the validated identifier and key registered for `circuit_id`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::UnknownCircuit`] if no key is registered.
    pub fn resolve(
        &self,
        circuit_id: &str,
    ) -> Result<(CircuitId, Arc<VerificationKey>), VerifierError> {
        self.keys
            .read()
            .get_key_value(circuit_id)
            .map(|(id, key)| (id.clone(), Arc::clone(key)))
            .ok_or_else(|| VerifierError::UnknownCircuit(circuit_id.to_string()))
    }

    /// Whether a key is registered for `circuit_id`. Never fails.
    pub fn has(&self, circuit_id: &str) -> bool {
        self.keys.read().contains_key(circuit_id)
    }

    /// Registered circuit identifiers, sorted.
    pub fn circuits(&self) -> Vec<CircuitId> {
        let mut ids: Vec<CircuitId> = self.keys.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of registered circuits.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether no circuit is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
