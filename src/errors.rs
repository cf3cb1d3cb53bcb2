//! Error Types
//!
//! Steady-state evaluation never fails: a missing target resolves to the
//! zero vector, a zero-length segment snaps, and palette lookups clamp.
//! Errors are confined to sequence construction and ease-name lookup.

use thiserror::Error;

/// The error type for sequence construction and curve lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// A sequence needs at least one keyframe.
    #[error("sequence has no keyframes")]
    EmptySequence,

    /// Keyframe times must be non-decreasing.
    #[error("keyframe at index {index} is earlier than its predecessor")]
    UnsortedKeyframes {
        /// Index of the offending keyframe.
        index: usize,
    },

    /// The named ease curve is not known.
    #[error("unknown ease curve: {0:?}")]
    UnknownEase(String),
}

/// Alias for `Result<T, CadenceError>`.
pub type Result<T> = std::result::Result<T, CadenceError>;
