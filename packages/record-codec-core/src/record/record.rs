//! Record values bound to a schema.

use std::sync::Arc;

use crate::error::CodecError;
use crate::schema::{FieldDescriptor, Schema};
use crate::types::Value;

use super::builder::RecordBuilder;

/// A complete record: exactly one value per schema field, in wire order.
///
/// Records are only produced by [`RecordBuilder::build`],
/// [`Record::from_values`] or the decoder, so every value already agrees
/// with its field's nullability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn from_parts(schema: Arc<Schema>, values: Vec<Value>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self { schema, values }
    }

    /// Starts a builder for `schema`.
    pub fn builder(schema: Arc<Schema>) -> RecordBuilder {
        RecordBuilder::new(schema)
    }

    /// Builds a record from a complete field-value mapping in one pass.
    ///
    /// Applies the same rules as [`RecordBuilder`]: unknown names fail with
    /// `FieldNotFound`, `Null` on a mandatory field fails with
    /// `NullNotAllowed`, and omitted fields fall back to their defaults.
    pub fn from_values<I, K, V>(schema: Arc<Schema>, values: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .try_fold(RecordBuilder::new(schema), |builder, (name, value)| {
                builder.set(name.as_ref(), value)
            })?
            .build()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the value of the field named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.field_index(name).map(|i| &self.values[i])
    }

    /// Values in wire order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterates `(field, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldDescriptor, &Value)> {
        self.schema.fields().iter().zip(self.values.iter())
    }

    /// Returns a builder pre-populated with this record's values.
    pub fn to_builder(&self) -> RecordBuilder {
        RecordBuilder::from_record(self)
    }
}
