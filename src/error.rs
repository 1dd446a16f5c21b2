//! Error taxonomy and the error side channel.
//!
//! All failures in this library are non-fatal: the triggering operation
//! returns without side effects and the error is delivered through a
//! callback registered on the console (plus a pull-style "last error"
//! slot). Nothing in the public drawing API propagates `Result` — a draw
//! call either happens or silently becomes a no-op, and the side channel
//! is how callers find out which.

use crate::types::Feature;

/// A non-fatal library error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation was issued after the console was shut down.
    #[error("console is not initialized")]
    NotInitialized,

    /// An argument was outside its valid range; prior state is unchanged.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A feature-gated operation was used without the feature enabled.
    #[error("feature not enabled: {0:?}")]
    NotEnabled(Feature),
}

impl Error {
    /// Stable numeric code for the error category.
    pub fn code(&self) -> u32 {
        match self {
            Error::NotInitialized => 0x0001,
            Error::InvalidValue(_) => 0x0002,
            Error::NotEnabled(_) => 0x0003,
        }
    }
}

/// Callback invoked for every reported error.
pub type ErrorCallback = Box<dyn FnMut(&Error)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            Error::NotInitialized,
            Error::InvalidValue("x".into()),
            Error::NotEnabled(Feature::COLOR),
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn messages_are_descriptive() {
        let err = Error::InvalidValue("polygon mode 9".into());
        assert!(err.to_string().contains("polygon mode 9"));
    }
}
