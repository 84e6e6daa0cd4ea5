//! # Canonical Encoding: JCS Bytes for Proofs and Public Signals
//!
//! `CanonicalBytes` is the sole construction path for bytes that enter a
//! digest or a verification strategy.
//!
//! ## Invariant
//!
//! The inner `Vec<u8>` is private. The only constructor is
//! `CanonicalBytes::new()`, which converts the input to a JSON value,
//! rejects unsupported value kinds, and serializes with RFC 8785 (JSON
//! Canonicalization Scheme): sorted keys, compact separators, UTF-8.
//!
//! Two structurally equal values therefore encode to the same bytes no
//! matter how their maps were built or in which order keys were inserted.
//!
//! ## Value Rules
//!
//! 1. `null`, `bool`, `string`, integers: pass through unchanged.
//! 2. Non-integer numbers: rejected with [`EncodingError::FloatRejected`].
//! 3. Objects and arrays: recursed.
//!
//! No cross-type normalization happens: `1` and `"1"` encode differently.

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodingError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - No float values appear in the encoding.
/// - Object keys are sorted, separators are compact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::FloatRejected`] if the value contains a
    /// non-integer number, and [`EncodingError::SerializationFailed`] if
    /// the value cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, EncodingError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Construct canonical bytes from an owned JSON value.
    pub fn from_value(value: Value) -> Result<Self, EncodingError> {
        let checked = reject_floats(value)?;
        let s = serde_jcs::to_string(&checked)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    ///
    /// Always false for a successfully encoded value; the shortest
    /// encodings are `""` (two bytes) and `0`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn reject_floats(value: Value) -> Result<Value, EncodingError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(value),
        Value::Number(ref n) => {
            if !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(EncodingError::FloatRejected(f));
                }
            }
            Ok(value)
        }
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (k, v) in map {
                out.insert(k, reject_floats(v)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(arr) => {
            let checked: Result<Vec<_>, _> = arr.into_iter().map(reject_floats).collect();
            Ok(Value::Array(checked?))
        }
    }
}

/// The canonical encoding of a (proof, public signals) pair.
///
/// The two halves are kept apart so a strategy can decode each on its own;
/// [`EncodedStatement::concat`] gives the `proof ++ signals` byte string
/// the placeholder digest is computed over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedStatement {
    /// Canonical encoding of the proof.
    pub proof: CanonicalBytes,
    /// Canonical encoding of the public signals.
    pub signals: CanonicalBytes,
}

impl EncodedStatement {
    /// `proof ++ signals`.
    pub fn concat(&self) -> Vec<u8> {
        concat_encodings(&self.proof, &self.signals)
    }
}

/// `proof ++ signals` for encodings held apart.
pub fn concat_encodings(proof: &CanonicalBytes, signals: &CanonicalBytes) -> Vec<u8> {
    let mut out = Vec::with_capacity(proof.len() + signals.len());
    out.extend_from_slice(proof.as_bytes());
    out.extend_from_slice(signals.as_bytes());
    out
}

/// Canonically encode a proof together with its public signals.
///
/// Pure and deterministic; no side effects.
///
/// # Errors
///
/// Returns [`EncodingError`] if either value contains unsupported content.
pub fn encode_statement(
    proof: &impl Serialize,
    signals: &impl Serialize,
) -> Result<EncodedStatement, EncodingError> {
    Ok(EncodedStatement {
        proof: CanonicalBytes::new(proof)?,
        signals: CanonicalBytes::new(signals)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn as_str(cb: &CanonicalBytes) -> &str {
        std::str::from_utf8(cb.as_bytes()).unwrap()
    }

    #[test]
    fn sorted_keys_compact_separators() {
        let data = serde_json::json!({"b": 2, "a": 1, "c": "hello"});
        let cb = CanonicalBytes::new(&data).expect("should encode");
        assert_eq!(as_str(&cb), r#"{"a":1,"b":2,"c":"hello"}"#);
    }

    #[test]
    fn nested_objects_are_sorted() {
        let data = serde_json::json!({
            "pi_a": {"y": "2", "x": "1"},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(as_str(&cb), r#"{"list":[3,2,1],"pi_a":{"x":"1","y":"2"}}"#);
    }

    #[test]
    fn struct_field_order_does_not_matter() {
        #[derive(Serialize)]
        struct Reordered {
            protocol: &'static str,
            curve: &'static str,
        }
        let from_struct = CanonicalBytes::new(&Reordered {
            protocol: "groth16",
            curve: "bn128",
        })
        .unwrap();
        let from_json =
            CanonicalBytes::new(&serde_json::json!({"curve": "bn128", "protocol": "groth16"}))
                .unwrap();
        assert_eq!(from_struct, from_json);
    }

    #[test]
    fn hash_map_iteration_order_does_not_matter() {
        let mut a = HashMap::new();
        let mut b = HashMap::new();
        for i in 0..32 {
            a.insert(format!("k{i}"), i);
        }
        for i in (0..32).rev() {
            b.insert(format!("k{i}"), i);
        }
        assert_eq!(CanonicalBytes::new(&a).unwrap(), CanonicalBytes::new(&b).unwrap());
    }

    #[test]
    fn integer_and_string_are_distinct() {
        let int = CanonicalBytes::new(&serde_json::json!({"v": 1})).unwrap();
        let s = CanonicalBytes::new(&serde_json::json!({"v": "1"})).unwrap();
        assert_ne!(int, s);
    }

    #[test]
    fn float_rejected() {
        let data = serde_json::json!({"signal": 1.5});
        match CanonicalBytes::new(&data).unwrap_err() {
            EncodingError::FloatRejected(f) => assert_eq!(f, 1.5),
            other => panic!("expected FloatRejected, got: {other}"),
        }
    }

    #[test]
    fn deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": {"b": [{"c": 3.25}]}});
        assert!(matches!(
            CanonicalBytes::new(&data),
            Err(EncodingError::FloatRejected(_))
        ));
    }

    #[test]
    fn non_string_map_keys_rejected() {
        let mut data = BTreeMap::new();
        data.insert((1u8, 2u8), "pair");
        assert!(matches!(
            CanonicalBytes::new(&data),
            Err(EncodingError::SerializationFailed(_))
        ));
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(CanonicalBytes::new(&serde_json::json!({})).unwrap().as_bytes(), b"{}");
        assert_eq!(CanonicalBytes::new(&serde_json::json!([])).unwrap().as_bytes(), b"[]");
    }

    #[test]
    fn unicode_passes_through_as_utf8() {
        let cb = CanonicalBytes::new(&serde_json::json!({"name": "\u{00e9}"})).unwrap();
        assert!(as_str(&cb).contains('\u{00e9}'));
    }

    #[test]
    fn encode_statement_concatenates_in_order() {
        let stmt = encode_statement(
            &serde_json::json!({"a": 1}),
            &serde_json::json!({"b": 2}),
        )
        .unwrap();
        assert_eq!(stmt.proof.as_bytes(), br#"{"a":1}"#);
        assert_eq!(stmt.signals.as_bytes(), br#"{"b":2}"#);
        assert_eq!(stmt.concat(), br#"{"a":1}{"b":2}"#.to_vec());
        assert_eq!(concat_encodings(&stmt.proof, &stmt.signals), stmt.concat());
    }

    #[test]
    fn encode_statement_propagates_signal_errors() {
        let result = encode_statement(&serde_json::json!({}), &serde_json::json!([0.25]));
        assert!(matches!(result, Err(EncodingError::FloatRejected(_))));
    }
}
