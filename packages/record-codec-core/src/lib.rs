//! Schema-driven binary record codec.
//!
//! Provides zig-zag varint encoding, logical-type conversions, record
//! schemas with nullable union fields, a validating record builder, and the
//! encoder/decoder pair that walks a record against its schema.
//!
//! ```
//! use std::sync::Arc;
//! use record_codec_core::codec::{Decoder, Encoder};
//! use record_codec_core::record::Record;
//! use record_codec_core::schema::{FieldDescriptor, Schema};
//! use record_codec_core::types::{ConversionRegistry, Timestamp, Value, TIMESTAMP_MICROS};
//!
//! let registry = Arc::new(ConversionRegistry::with_builtins().unwrap());
//! let schema = Schema::shared(
//!     "Event",
//!     vec![FieldDescriptor::long("time")
//!         .with_logical_type(TIMESTAMP_MICROS)
//!         .nullable()],
//! )
//! .unwrap();
//!
//! let time = Timestamp::new(279_275_953, 455_104_000);
//! let record = Record::builder(schema.clone()).set("time", time).unwrap().build().unwrap();
//!
//! let bytes = Encoder::new(registry.clone()).encode(&record).unwrap();
//! assert_eq!(bytes, [0x02, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F]);
//!
//! let decoded = Decoder::new(registry).decode(&schema, &bytes).unwrap();
//! assert_eq!(decoded.get("time"), Some(&Value::Timestamp(time)));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod schema;
pub mod types;
pub mod varint;

pub use error::{CodecError, Result};
