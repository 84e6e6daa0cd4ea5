//! # zkv-core: Foundational Types for the Proof Verifier
//!
//! The leaf crate of the zkv workspace. It owns the value types every
//! other crate passes around and the one serialization path that feeds
//! digest computation.
//!
//! ## Key Design Principles
//!
//! 1. **Validated circuit identifiers.** `CircuitId` can only be built
//!    through `CircuitId::new()`, which rejects empty or malformed input.
//!    Registries key on `CircuitId`, never on bare strings.
//!
//! 2. **`CanonicalBytes` newtype.** Proofs and public signals are encoded
//!    through `CanonicalBytes::new()` (RFC 8785 JCS). Identical content
//!    always yields identical bytes, whatever the key insertion order.
//!
//! 3. **Digests over canonical input.** `sha256_digest()` accepts only
//!    `&CanonicalBytes`. Raw-byte hashing goes through the explicit
//!    `Sha256Accumulator`.
//!
//! 4. **UTC-only timestamps.** `Timestamp` is UTC with seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zkv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::{concat_encodings, encode_statement, CanonicalBytes, EncodedStatement};
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm, Sha256Accumulator};
pub use error::{EncodingError, InvalidCircuitId};
pub use identity::CircuitId;
pub use temporal::Timestamp;
