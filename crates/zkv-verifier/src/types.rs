//! # Opaque Statement Values
//!
//! Verification keys, proofs and public signals arrive from the caller as
//! structured values. The registry and the facade never look inside them;
//! only the active strategy interprets their shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! opaque_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// Wrap a structured value.
            pub fn new(value: Value) -> Self {
                Self(value)
            }

            /// Borrow the wrapped value.
            pub fn as_value(&self) -> &Value {
                &self.0
            }

            /// Unwrap into the inner value.
            pub fn into_value(self) -> Value {
                self.0
            }

            /// True for `null`, `{}`, `[]` and `""`.
            pub fn is_empty(&self) -> bool {
                is_empty_value(&self.0)
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

opaque_value!(
    /// Public material needed to check proofs for one circuit.
    ///
    /// Held by the registry for the lifetime of the process (or until
    /// replaced) and handed verbatim to the active strategy.
    VerificationKey
);

opaque_value!(
    /// A zero-knowledge proof as submitted by the caller.
    Proof
);

opaque_value!(
    /// The public inputs bound to a proof.
    PublicSignals
);

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
