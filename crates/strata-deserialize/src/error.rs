//! Decoding errors
//!
//! Every decoding failure is fatal: the module load stops at the first error.

use strata_ir::{LoopId, SymbolId};
use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unresolved descriptor reference: {package}/{class}.{name} (index {index:#x})")]
    UnresolvedReference {
        package: String,
        class: String,
        name: String,
        index: u64,
    },

    #[error("Dangling loop reference: {loop_id} was never registered")]
    DanglingLoopReference { loop_id: LoopId },

    #[error("Unsupported {record} variant: {variant}")]
    UnsupportedVariant {
        record: &'static str,
        variant: String,
    },

    #[error("Constant value is not set")]
    MalformedConstant,

    #[error("Declaration for {descriptor} registered twice")]
    DuplicateDeclaration { descriptor: String },

    #[error("Symbol {id}: expected {expected}, found {found}")]
    SymbolKindMismatch {
        id: SymbolId,
        expected: String,
        found: String,
    },

    #[error("Unknown declaration origin: {0}")]
    UnknownOrigin(String),

    #[error("No declaration decoded for {descriptor}")]
    UnknownDeclaration { descriptor: String },

    #[error("Nesting depth limit exceeded (max {limit})")]
    DepthLimitExceeded { limit: usize },

    #[error("No record for content id {content_id:#x}")]
    MissingRecord { content_id: u64 },

    #[error("Malformed record: {0}")]
    Record(#[from] bincode::Error),
}

impl DecodeError {
    pub(crate) fn unsupported(record: &'static str, variant: impl Into<String>) -> Self {
        DecodeError::UnsupportedVariant {
            record,
            variant: variant.into(),
        }
    }

    /// `UnsupportedVariant` for a record whose discriminant was never set
    pub(crate) fn not_set(record: &'static str) -> Self {
        Self::unsupported(record, "NotSet")
    }

    pub(crate) fn kind_mismatch(
        id: SymbolId,
        expected: impl Into<String>,
        found: impl std::fmt::Display,
    ) -> Self {
        DecodeError::SymbolKindMismatch {
            id,
            expected: expected.into(),
            found: found.to_string(),
        }
    }
}

/// Errors loading a [`DecoderConfig`](crate::DecoderConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse decoder config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid decoder config: {0}")]
    Validation(String),
}
