//! # Verification Events and Counters
//!
//! One [`VerificationEvent`] is emitted for every verification that runs to
//! a verdict. Delivery is fire-and-forget: [`EventSink::emit`] returns
//! nothing and the facade never waits on or inspects the sink.
//!
//! [`VerifierMetrics`] keeps in-process atomic counters that the caller
//! can read or export however it likes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use zkv_core::{CircuitId, Timestamp};

use crate::strategy::StrategyKind;

/// Outcome of one verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEvent {
    /// The circuit the proof was checked against.
    pub circuit_id: CircuitId,
    /// Whether the proof was accepted.
    pub accepted: bool,
    /// The strategy that produced the verdict.
    pub strategy: StrategyKind,
    /// When the verdict was reached (UTC, seconds precision).
    pub timestamp: Timestamp,
}

/// Receiver of verification events.
///
/// Implementations must not block for long and must not panic; the
/// facade calls `emit` inline on the verifying thread.
pub trait EventSink: Send + Sync {
    /// Record one event.
    fn emit(&self, event: &VerificationEvent);
}

/// Default sink: logs each event through `tracing`.
///
/// Accepts are logged at `info`, rejections at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &VerificationEvent) {
        if event.accepted {
            tracing::info!(
                circuit_id = %event.circuit_id,
                strategy = %event.strategy,
                timestamp = %event.timestamp,
                accepted = true,
                "proof verified"
            );
        } else {
            tracing::warn!(
                circuit_id = %event.circuit_id,
                strategy = %event.strategy,
                timestamp = %event.timestamp,
                accepted = false,
                "proof rejected"
            );
        }
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&self, _event: &VerificationEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: &VerificationEvent) {
        (**self).emit(event)
    }
}

/// In-process verification counters.
///
/// Cloning shares the underlying counters.
#[derive(Debug, Clone, Default)]
pub struct VerifierMetrics {
    verifications: Arc<AtomicU64>,
    accepted: Arc<AtomicU64>,
    rejected: Arc<AtomicU64>,
    errors: Arc<AtomicU64>,
}

impl VerifierMetrics {
    /// Fresh counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_verdict(&self, accepted: bool) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
        if accepted {
            self.accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Verifications that reached a verdict.
    pub fn verifications(&self) -> u64 {
        self.verifications.load(Ordering::Relaxed)
    }

    /// Verdicts that accepted.
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Verdicts that rejected.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Calls that could not run (unknown circuit, encoding failure).
    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}
