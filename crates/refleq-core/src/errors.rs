//! Error facility for the comparison engine.
//!
//! Only programmer errors surface as `Err`: an invalid mode combination is
//! rejected when the comparator is built. Anything found while comparing,
//! including incompatible types, is reported as a
//! [`Difference`](crate::Difference), never an error.

use thiserror::Error;

use crate::compare::modes::Mode;

/// Result type alias using [`CompareError`].
pub type Result<T> = std::result::Result<T, CompareError>;

/// Stable classification of configuration errors.
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareErrorKind {
    /// Two modes that cannot be active at the same time were requested.
    ConflictingModes,
}

impl CompareErrorKind {
    /// Get the stable error code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            CompareErrorKind::ConflictingModes => "ERR_CONFLICTING_MODES",
        }
    }
}

/// A fatal configuration error raised when a comparator is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Mutually exclusive comparison modes were combined.
    #[error("conflicting comparison modes: {first} cannot be combined with {second}")]
    ConflictingModes { first: Mode, second: Mode },
}

impl CompareError {
    /// Get the error kind.
    pub fn kind(&self) -> CompareErrorKind {
        match self {
            CompareError::ConflictingModes { .. } => CompareErrorKind::ConflictingModes,
        }
    }

    /// Get the stable error code.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
