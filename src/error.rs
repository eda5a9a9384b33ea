//! Collection of errors shared across the crate's fallible operations.
//!
//! Verification functions never surface these: a malformed signature or
//! public key verifies to `false`. Errors are reserved for precondition
//! violations and for the rare operational failures (an exhausted nonce
//! loop, an out-of-range RSA input) that a caller must be able to tell
//! apart.

use num::BigInt;

/// The crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The extended-Euclid kernel was handed a value that shares a factor
    /// with the modulus.
    #[error("no inverse exists for {value} modulo {modulus}")]
    NotInvertible {
        /// The value that could not be inverted.
        value: BigInt,
        /// The modulus it was to be inverted against.
        modulus: BigInt,
    },

    /// Every ephemeral nonce drawn by a signing loop produced a zero
    /// signature component. With a working random source this has
    /// negligible probability; hitting it means the source is broken.
    #[error("signing gave up after {0} degenerate nonces")]
    DegenerateNonces(usize),

    /// An RSA input outside the usable range `(1, n - 1)`.
    #[error("message is out of range for the modulus")]
    MessageOutOfRange,

    /// A derived point is the group identity and has no coordinates to
    /// work with.
    #[error("derived point is the group identity")]
    IdentityPoint,
}
