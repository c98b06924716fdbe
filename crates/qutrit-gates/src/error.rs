//! Error types for the qutrit gate crate.

use thiserror::Error;

/// Errors that can occur when selecting a qutrit gate, level or subspace.
///
/// Numeric inputs are never rejected: a NaN or infinite angle flows through
/// into a non-finite matrix instead of producing an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QutritError {
    /// Basis label is not one of `g`, `e`, `h`.
    #[error("Unknown basis label '{0}' (expected one of: g, e, h)")]
    UnknownBasisLabel(String),

    /// Subspace selector is not `01` or `12`.
    #[error("Unknown subspace '{0}' (expected 01 or 12)")]
    UnknownSubspace(String),

    /// Phase level selector is not `0` or `2`.
    #[error("Unknown phase level '{0}' (expected 0 or 2)")]
    UnknownLevel(String),

    /// Gate name not present in the catalogue.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Gate was given the wrong number of angle parameters.
    #[error("Gate '{gate}' takes {expected} parameter(s), got {got}")]
    ParameterCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Number of parameters the gate takes.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },
}

/// Result type for qutrit gate operations.
pub type QutritResult<T> = Result<T, QutritError>;
