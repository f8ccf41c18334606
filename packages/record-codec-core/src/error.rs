//! Codec error types.

use thiserror::Error;

use crate::types::ConversionError;

/// Encode, decode and record construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input ended before the field was fully read
    #[error("Truncated input while reading field '{field}' at byte offset {offset}")]
    TruncatedInput { field: String, offset: usize },

    /// Varint ran past ten bytes or overflowed 64 bits
    #[error("Malformed varint in field '{field}' at byte offset {offset}")]
    MalformedVarint { field: String, offset: usize },

    /// Union branch selector outside {0, 1}
    #[error("Unknown union branch {branch} for field '{field}' at byte offset {offset}")]
    UnknownUnionBranch {
        field: String,
        branch: i64,
        offset: usize,
    },

    /// Value does not fit the field it was written to
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Null assigned to a mandatory field
    #[error("Field '{field}' does not accept null")]
    NullNotAllowed { field: String },

    /// Field never set and without a default
    #[error("Field '{field}' has no value and no default")]
    MissingField { field: String },

    /// Strict decode left unread input
    #[error("Trailing bytes after record: consumed {consumed} of {total}")]
    TrailingBytes { consumed: usize, total: usize },

    /// Field not present in the schema
    #[error("Field '{field}' not found in schema")]
    FieldNotFound { field: String },

    /// Field name declared twice
    #[error("Field '{field}' declared more than once")]
    DuplicateField { field: String },

    /// Default value inconsistent with the field declaration
    #[error("Invalid default for field '{field}': {reason}")]
    InvalidDefault { field: String, reason: String },

    /// Schema shape not supported by the codec
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Decoder refused to apply a conversion to a null-defaulted field
    #[error("Conversion '{logical_type}' is not bound to null-defaulted field '{field}'")]
    ConversionUnbound { field: String, logical_type: String },

    /// Conversion registry failure
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
