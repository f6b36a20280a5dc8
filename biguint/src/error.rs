//! Errors from BigUInt arithmetic.

use thiserror::Error;

/// Errors that can occur in BigUInt arithmetic.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BigUIntError {
    /// The subtrahend is larger than the receiver.
    #[error("arithmetic underflow")]
    Underflow,
}
