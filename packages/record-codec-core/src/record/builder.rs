//! Record builder with eager nullability checks.

use std::sync::Arc;

use crate::error::CodecError;
use crate::schema::validation::value_kind_mismatch;
use crate::schema::Schema;
use crate::types::{PhysicalType, Value};

use super::record::Record;

/// Builder for [`Record`].
///
/// `set` rejects a `Null` on a mandatory field, or a value the field's type
/// cannot hold, immediately. `build` fills unset fields from their defaults,
/// which the schema has already checked the same way, and fails on the first
/// field that has neither a value nor a default.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema: Arc<Schema>,
    values: Vec<Option<Value>>,
}

impl RecordBuilder {
    /// Creates a builder with every field unset.
    pub fn new(schema: Arc<Schema>) -> Self {
        let values = vec![None; schema.len()];
        Self { schema, values }
    }

    /// Creates a builder with every field set from `record`.
    pub fn from_record(record: &Record) -> Self {
        Self {
            schema: Arc::clone(record.schema()),
            values: record.values().iter().copied().map(Some).collect(),
        }
    }

    /// Assigns `value` to the field named `name`.
    ///
    /// # Errors
    /// * `FieldNotFound` if the schema has no such field
    /// * `NullNotAllowed` if `value` is `Null` and the field is mandatory
    /// * `InvalidValue` if a non-null value is given to a `Null` field, or a
    ///   timestamp to a field with no logical type
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Result<Self, CodecError> {
        let index = self.schema.require_field(name)?;
        let field = &self.schema.fields()[index];
        let value = value.into();

        if value.is_null() && !field.accepts_null() {
            return Err(CodecError::NullNotAllowed {
                field: field.name.clone(),
            });
        }
        if let Some(reason) = value_kind_mismatch(field, &value) {
            return Err(CodecError::InvalidValue {
                field: field.name.clone(),
                reason,
            });
        }

        self.values[index] = Some(value);
        Ok(self)
    }

    /// Unsets the field named `name`, so `build` falls back to its default.
    pub fn clear(mut self, name: &str) -> Result<Self, CodecError> {
        let index = self.schema.require_field(name)?;
        self.values[index] = None;
        Ok(self)
    }

    /// Whether the field named `name` has been explicitly set.
    pub fn is_set(&self, name: &str) -> bool {
        self.schema
            .field_index(name)
            .is_some_and(|i| self.values[i].is_some())
    }

    /// Completes the record.
    ///
    /// Unset fields take their default. A `Null` field without a default is
    /// `Null`, its only possible value.
    ///
    /// # Errors
    /// `MissingField` for the first unset field that has no default.
    pub fn build(self) -> Result<Record, CodecError> {
        let values = self
            .schema
            .fields()
            .iter()
            .zip(self.values)
            .map(|(field, value)| match (value, field.default) {
                (Some(value), _) | (None, Some(value)) => Ok(value),
                (None, None) if field.physical == PhysicalType::Null => Ok(Value::Null),
                (None, None) => Err(CodecError::MissingField {
                    field: field.name.clone(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Record::from_parts(self.schema, values))
    }
}
