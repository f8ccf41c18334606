//! Immutable record schema.
//!
//! Field order is the wire order: nothing but the values themselves is
//! written, so encoder and decoder must walk the same sequence.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CodecError;

use super::field::FieldDescriptor;
use super::validation;

/// Record schema with field definitions in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Record name
    name: String,
    /// Field definitions in declaration order
    fields: Vec<FieldDescriptor>,
    /// Field name to position in `fields`
    index: HashMap<String, usize>,
}

impl Schema {
    /// Creates a validated schema.
    ///
    /// # Arguments
    /// * `name` - Record name
    /// * `fields` - Field definitions, in wire order
    ///
    /// # Returns
    /// `Result<Schema, CodecError>` containing the schema or the first
    /// validation failure.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Result<Self, CodecError> {
        validation::validate_field_names(&fields)?;
        validation::validate_field_shapes(&fields)?;
        validation::validate_defaults(&fields)?;

        let index = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();

        Ok(Self {
            name: name.into(),
            fields,
            index,
        })
    }

    /// Creates a validated schema behind an `Arc`, ready to share.
    pub fn shared(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Arc<Self>, CodecError> {
        Self::new(name, fields).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field definitions in wire order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the field named `name`, if any.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_index(name).map(|i| &self.fields[i])
    }

    /// Returns the wire position of the field named `name`.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Like [`Schema::field_index`], but fails with `FieldNotFound`.
    pub fn require_field(&self, name: &str) -> Result<usize, CodecError> {
        self.field_index(name)
            .ok_or_else(|| CodecError::FieldNotFound {
                field: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
