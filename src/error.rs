use thiserror::Error;

/// Errors that can surface during live evaluation.
///
/// Evaluation is deliberately total: parse failures, missing fields and
/// division by zero all coerce to `0` rather than erroring. The one fatal
/// condition is a cyclic field reference, which would otherwise recurse
/// forever.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Cyclic reference detected while resolving field '{id}'")]
    CyclicReference { id: String },

    #[error("Failed to parse serialized operations: {0}")]
    InvalidOperations(String),
}

/// Errors from the persistence boundary where calculations are stored as
/// versioned encoded records.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No calculation stored for logic field '{0}'")]
    NotFound(String),

    #[error("Record format version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    #[error("Failed to encode calculation record: {0}")]
    Encode(String),

    #[error("Failed to decode calculation record: {0}")]
    Decode(String),
}
