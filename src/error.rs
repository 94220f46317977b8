//! Crate-level error types.

use std::fmt;

/// Errors produced by the flycam crate.
///
/// Every variant except [`Io`](Self::Io) and
/// [`OptionsParse`](Self::OptionsParse) is a local precondition violation:
/// the caller passed inputs that cannot describe a camera, and retrying
/// with the same inputs fails the same way.
#[derive(Debug)]
pub enum CameraError {
    /// Projection parameters do not describe a valid frustum.
    InvalidFrustum {
        /// Which constraint was violated.
        reason: String,
    },
    /// A near-zero or non-finite vector was used where a direction is
    /// required.
    DegenerateVector {
        /// What the vector was supposed to be.
        context: &'static str,
    },
    /// A rotation basis collapsed or picked up non-finite components.
    InvalidOrientation {
        /// Which step detected the problem.
        context: &'static str,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl CameraError {
    pub(crate) fn frustum(reason: impl Into<String>) -> Self {
        Self::InvalidFrustum {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrustum { reason } => {
                write!(f, "invalid frustum: {reason}")
            }
            Self::DegenerateVector { context } => {
                write!(f, "degenerate vector: {context}")
            }
            Self::InvalidOrientation { context } => {
                write!(f, "invalid orientation: {context}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
