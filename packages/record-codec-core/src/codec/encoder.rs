use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::record::Record;
use crate::schema::FieldDescriptor;
use crate::types::{ConversionRegistry, PhysicalType, Value};
use crate::varint::write_zigzag;

use super::{resolve_conversion, NULL_BRANCH, VALUE_BRANCH};

/// Encodes records into their binary form.
///
/// Holds the registry read-only; one encoder may serve many threads.
#[derive(Debug, Clone)]
pub struct Encoder {
    registry: Arc<ConversionRegistry>,
    config: CodecConfig,
}

impl Encoder {
    /// Creates an encoder with the default configuration.
    pub fn new(registry: Arc<ConversionRegistry>) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: Arc<ConversionRegistry>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes `record` into a fresh buffer.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut dst = Vec::with_capacity(self.config.initial_buffer_capacity);
        self.encode_into(record, &mut dst)?;
        Ok(dst)
    }

    /// Appends the encoding of `record` to `dst`.
    ///
    /// On error `dst` is restored to its original length.
    ///
    /// # Returns
    /// Number of bytes appended.
    pub fn encode_into(&self, record: &Record, dst: &mut Vec<u8>) -> Result<usize> {
        let start = dst.len();
        for (field, value) in record.iter() {
            tracing::trace!(field = %field.name, offset = dst.len() - start, "Encoding field");
            if let Err(e) = self.encode_field(field, value, dst) {
                dst.truncate(start);
                return Err(e);
            }
        }

        let written = dst.len() - start;
        tracing::debug!(
            schema = record.schema().name(),
            fields = record.values().len(),
            bytes = written,
            "Encoded record"
        );
        Ok(written)
    }

    /// Encodes independent records in parallel.
    ///
    /// Fails if any record fails to encode; no partial output is returned.
    #[cfg(feature = "parallel")]
    pub fn encode_batch(&self, records: &[Record]) -> Result<Vec<Vec<u8>>> {
        records.par_iter().map(|record| self.encode(record)).collect()
    }

    fn encode_field(&self, field: &FieldDescriptor, value: &Value, dst: &mut Vec<u8>) -> Result<()> {
        if field.nullable {
            if value.is_null() {
                write_zigzag(NULL_BRANCH, dst);
                return Ok(());
            }
            write_zigzag(VALUE_BRANCH, dst);
        } else if value.is_null() && field.physical != PhysicalType::Null {
            return Err(CodecError::InvalidValue {
                field: field.name.clone(),
                reason: "null in a mandatory field".to_string(),
            });
        }

        match field.physical {
            PhysicalType::Null => {
                if !value.is_null() {
                    return Err(CodecError::InvalidValue {
                        field: field.name.clone(),
                        reason: format!("null field cannot hold {}", value.kind()),
                    });
                }
            }
            PhysicalType::Long => {
                let raw = self.to_physical(field, value)?;
                write_zigzag(raw, dst);
            }
        }
        Ok(())
    }

    fn to_physical(&self, field: &FieldDescriptor, value: &Value) -> Result<i64> {
        match resolve_conversion(&self.registry, field) {
            Some(conversion) => {
                conversion
                    .to_physical(value)
                    .ok_or_else(|| CodecError::InvalidValue {
                        field: field.name.clone(),
                        reason: format!(
                            "{} is not representable as '{}'",
                            value.kind(),
                            conversion.logical_type
                        ),
                    })
            }
            None => value.as_long().ok_or_else(|| CodecError::InvalidValue {
                field: field.name.clone(),
                reason: format!("expected long, got {}", value.kind()),
            }),
        }
    }
}
