//! Unified error types for the avm-templates toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while instantiating a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    // --- Injection ---

    /// The placeholder list and the value list have different lengths.
    #[error("length of placeholders {placeholders} does not match length of replacement values {values}")]
    ArityMismatch { placeholders: usize, values: usize },

    /// A placeholder, after applying the shift from earlier substitutions, falls outside
    /// the buffer.
    #[error("placeholder {index} at offset {offset} (width {width}) exceeds buffer length {len}")]
    OffsetOutOfRange {
        index: usize,
        offset: usize,
        width: usize,
        len: usize,
    },

    /// A placeholder starts before the end of the previous one in the original buffer.
    #[error("placeholder {index} at offset {offset} overlaps or precedes the previous placeholder ending at {previous_end}")]
    PlaceholderOrder {
        index: usize,
        offset: usize,
        previous_end: usize,
    },

    // --- Values ---

    /// An address string could not be decoded into a 32-byte public key.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A base64 value did not decode to exactly 32 bytes.
    #[error("invalid 32-byte value: {0}")]
    InvalidBytes32(String),

    /// A variable-length integer was truncated or overflowed 64 bits.
    #[error("malformed varint: {0}")]
    MalformedVarint(&'static str),

    // --- Templates ---

    /// A reference or user-supplied program is not valid base64.
    #[error("invalid program encoding: {0}")]
    InvalidProgram(String),

    /// The HTLC hash function is not one of: `sha256`, `keccak256`.
    #[error("unknown hash function: {0} (supported: sha256, keccak256)")]
    UnknownHashFunction(String),

    /// A template parameter is outside the range the contract accepts.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // --- Configuration ---

    /// The request or artifact file was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request or artifact file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, TemplateError>`.
pub type Result<T> = std::result::Result<T, TemplateError>;
