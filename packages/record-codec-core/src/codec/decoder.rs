use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{CodecConfig, NullDefaultConversion};
use crate::error::{CodecError, Result};
use crate::record::Record;
use crate::schema::{FieldDescriptor, Schema};
use crate::types::{ConversionRegistry, PhysicalType, Value};
use crate::varint::{decode_zigzag, VarintError};

use super::{resolve_conversion, NULL_BRANCH, VALUE_BRANCH};

/// Decodes records from their binary form.
///
/// Holds the registry read-only; one decoder may serve many threads.
#[derive(Debug, Clone)]
pub struct Decoder {
    registry: Arc<ConversionRegistry>,
    config: CodecConfig,
}

impl Decoder {
    /// Creates a decoder with the default configuration.
    pub fn new(registry: Arc<ConversionRegistry>) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: Arc<ConversionRegistry>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes one record from `src`.
    ///
    /// In strict mode, fails with `TrailingBytes` unless `src` is consumed
    /// exactly. Otherwise trailing bytes are ignored.
    pub fn decode(&self, schema: &Arc<Schema>, src: &[u8]) -> Result<Record> {
        let (record, consumed) = self.decode_prefix(schema, src)?;
        if self.config.strict && consumed != src.len() {
            return Err(CodecError::TrailingBytes {
                consumed,
                total: src.len(),
            });
        }
        Ok(record)
    }

    /// Decodes one record from the front of `src`.
    ///
    /// # Returns
    /// The record and the number of bytes consumed.
    pub fn decode_prefix(&self, schema: &Arc<Schema>, src: &[u8]) -> Result<(Record, usize)> {
        let mut offset = 0;
        let mut values = Vec::with_capacity(schema.len());

        for field in schema.fields() {
            tracing::trace!(field = %field.name, offset, "Decoding field");
            let (value, read) = self.decode_field(field, src, offset)?;
            values.push(value);
            offset += read;
        }

        tracing::debug!(
            schema = schema.name(),
            fields = values.len(),
            bytes = offset,
            "Decoded record"
        );
        Ok((Record::from_parts(Arc::clone(schema), values), offset))
    }

    /// Decodes independent buffers in parallel against one schema.
    ///
    /// Fails if any buffer fails to decode; no partial output is returned.
    #[cfg(feature = "parallel")]
    pub fn decode_batch(&self, schema: &Arc<Schema>, buffers: &[&[u8]]) -> Result<Vec<Record>> {
        buffers
            .par_iter()
            .map(|src| self.decode(schema, src))
            .collect()
    }

    /// Decodes a single field starting at `offset`.
    ///
    /// # Returns
    /// The value and the number of bytes consumed.
    fn decode_field(
        &self,
        field: &FieldDescriptor,
        src: &[u8],
        offset: usize,
    ) -> Result<(Value, usize)> {
        let mut pos = offset;

        if field.nullable {
            let (branch, read) = read_long(field, src, pos)?;
            match branch {
                NULL_BRANCH => return Ok((Value::Null, read)),
                VALUE_BRANCH => pos += read,
                other => {
                    return Err(CodecError::UnknownUnionBranch {
                        field: field.name.clone(),
                        branch: other,
                        offset: pos,
                    })
                }
            }
        }

        let value = match field.physical {
            PhysicalType::Null => Value::Null,
            PhysicalType::Long => {
                let (raw, read) = read_long(field, src, pos)?;
                pos += read;
                self.to_value(field, raw)?
            }
        };
        Ok((value, pos - offset))
    }

    fn to_value(&self, field: &FieldDescriptor, raw: i64) -> Result<Value> {
        let Some(conversion) = resolve_conversion(&self.registry, field) else {
            return Ok(Value::Long(raw));
        };

        if field.nullable
            && field.has_null_default()
            && self.config.null_default_conversion == NullDefaultConversion::Reject
        {
            tracing::warn!(
                field = %field.name,
                logical_type = %conversion.logical_type,
                "Refusing conversion on null-defaulted field"
            );
            return Err(CodecError::ConversionUnbound {
                field: field.name.clone(),
                logical_type: conversion.logical_type.clone(),
            });
        }

        Ok(conversion.to_logical(raw))
    }
}

fn read_long(field: &FieldDescriptor, src: &[u8], offset: usize) -> Result<(i64, usize)> {
    decode_zigzag(src, offset).map_err(|e| match e {
        VarintError::Truncated { offset } => CodecError::TruncatedInput {
            field: field.name.clone(),
            offset,
        },
        VarintError::Overflow { offset } => CodecError::MalformedVarint {
            field: field.name.clone(),
            offset,
        },
    })
}
