//! Explicit failures
//!
//! Parsing never fails loudly: unknown spellings become `Invalid` sentinels.
//! The errors here are reserved for operations that cannot produce a
//! meaningful result, chiefly converting between unrelated units.

use thiserror::Error;

use crate::convert::Conversion;

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Incompatible measures: cannot convert {from} to {to}")]
    IncompatibleMeasures { from: String, to: String },

    #[error("Invalid unit: {0:?}")]
    InvalidUnit(String),

    #[error("Invalid prefix: {0:?}")]
    InvalidPrefix(String),
}

impl UnitError {
    /// The inert conversion paired with every failure.
    ///
    /// It leaves values untouched and carries no meaning; it exists so a caller
    /// holding only the conversion cannot crash, not so it can be trusted.
    pub fn fallback(&self) -> Conversion {
        Conversion::Identity
    }
}
