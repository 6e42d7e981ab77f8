//! Structured error types for vector-set processing

use cipherval_api::OracleError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcvpError {
    #[error("failed to decode vector set: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(serde_json::Error),

    #[error("test group {group} has unknown direction {direction:?}")]
    UnknownDirection { group: u64, direction: String },

    #[error("test group {group} has unknown type {test_type:?}")]
    UnknownTestType { group: u64, test_type: String },

    #[error("test group {group} has type MCT which is unsupported for {operation:?}")]
    MctUnsupported { group: u64, operation: String },

    #[error("test group {group} contains non-byte-multiple key length {bits}")]
    KeyBits { group: u64, bits: u32 },

    #[error("test group {group} requests MCT with a {bits}-bit key, but only 128, 192 and 256 bits are supported")]
    MctKeySize { group: u64, bits: u32 },

    #[error("test case {group}/{case} contains key {key:?} of length {actual}, but expected {bits}-bit key")]
    KeyLength {
        group: u64,
        case: u64,
        key: String,
        actual: usize,
        bits: u32,
    },

    #[error("failed to decode hex {field:?} in test case {group}/{case}: {source}")]
    Hex {
        group: u64,
        case: u64,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("test case {group}/{case} has input of length {actual}, but expected multiple of {block_size}")]
    InputLength {
        group: u64,
        case: u64,
        actual: usize,
        block_size: usize,
    },

    #[error("test case {group}/{case} has MCT seed of length {actual}, but expected exactly {block_size}")]
    MctInputLength {
        group: u64,
        case: u64,
        actual: usize,
        block_size: usize,
    },

    #[error("test case {group}/{case} has IV of length {actual}, but expected {expected}")]
    IvLength {
        group: u64,
        case: u64,
        actual: usize,
        expected: usize,
    },

    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("{operation} returned {actual} bytes, but expected {expected}")]
    OutputLength {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown block cipher algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("vector set does not name an algorithm")]
    MissingAlgorithm,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AcvpError>;

impl From<toml::de::Error> for AcvpError {
    fn from(e: toml::de::Error) -> Self {
        AcvpError::Config(e.to_string())
    }
}
