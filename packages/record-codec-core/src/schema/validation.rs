//! Validation methods for record schemas.

use std::collections::HashSet;

use super::field::FieldDescriptor;
use crate::error::CodecError;
use crate::types::{PhysicalType, Value};

/// Validates that field names are non-empty and unique.
pub(crate) fn validate_field_names(fields: &[FieldDescriptor]) -> Result<(), CodecError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(CodecError::InvalidSchema(
                "field name must not be empty".to_string(),
            ));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(CodecError::DuplicateField {
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}

/// Validates that every field is a supported shape.
///
/// A nullable `Null` field would be the union `{Null, Null}`, which has no
/// distinguishable second branch.
pub(crate) fn validate_field_shapes(fields: &[FieldDescriptor]) -> Result<(), CodecError> {
    for field in fields {
        if field.nullable && field.physical == PhysicalType::Null {
            return Err(CodecError::InvalidSchema(format!(
                "field '{}' is a nullable null",
                field.name
            )));
        }
    }
    Ok(())
}

/// Checks that a non-null `value` fits the physical type of `field`.
///
/// A `Null` field holds nothing else. A `Timestamp` needs a logical type to
/// be converted through; a bare `Long` field cannot carry one. Whether the
/// logical type is actually registered is up to the encoder.
///
/// # Returns
/// The reason for the mismatch, if any.
pub(crate) fn value_kind_mismatch(field: &FieldDescriptor, value: &Value) -> Option<String> {
    match (value, field.physical) {
        (Value::Null, _) => None,
        (other, PhysicalType::Null) => Some(format!("null field cannot hold {}", other.kind())),
        (Value::Timestamp(_), PhysicalType::Long) if field.logical_type.is_none() => {
            Some("timestamp on a field without a logical type".to_string())
        }
        _ => None,
    }
}

/// Validates that defaults agree with nullability and physical type.
///
/// A mandatory field may not default to `Null`. Non-null defaults go
/// through [`value_kind_mismatch`], the same check the record builder
/// applies to assigned values.
pub(crate) fn validate_defaults(fields: &[FieldDescriptor]) -> Result<(), CodecError> {
    for field in fields {
        let Some(default) = &field.default else {
            continue;
        };

        if default.is_null() && !field.accepts_null() {
            return Err(CodecError::InvalidDefault {
                field: field.name.clone(),
                reason: "mandatory field cannot default to null".to_string(),
            });
        }
        if let Some(reason) = value_kind_mismatch(field, default) {
            return Err(CodecError::InvalidDefault {
                field: field.name.clone(),
                reason,
            });
        }
    }
    Ok(())
}
