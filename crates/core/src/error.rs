//! Error types for the matisse extraction library.

use thiserror::Error;

/// Primary error type for extraction operations.
///
/// Extraction itself never fails: structural absence degrades to an empty
/// or partial result. The error type exists for the one genuinely fallible
/// internal step, decompressing a candidate stream region.
#[derive(Error, Debug)]
pub enum LayerError {
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Convenience Result type alias for LayerError.
pub type Result<T> = std::result::Result<T, LayerError>;
