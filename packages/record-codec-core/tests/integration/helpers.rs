//! Shared fixtures for the integration suite.

use std::sync::Arc;

use record_codec_core::codec::{Decoder, Encoder};
use record_codec_core::config::CodecConfig;
use record_codec_core::schema::{FieldDescriptor, Schema};
use record_codec_core::types::{ConversionRegistry, Timestamp, Value, TIMESTAMP_MICROS};

/// 1978-11-07T08:39:13.455104Z. Its microsecond count zig-zags to
/// `80 80 80 80 80 80 7F`, which is easy to spot in a byte dump.
pub fn boundary_instant() -> Timestamp {
    Timestamp::new(279_275_953, 455_104_000)
}

pub const BOUNDARY_MANDATORY: [u8; 7] = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F];
pub const BOUNDARY_NULLABLE: [u8; 8] = [0x02, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F];

fn time_field() -> FieldDescriptor {
    FieldDescriptor::long("time").with_logical_type(TIMESTAMP_MICROS)
}

/// Record with one nullable timestamp field defaulting to null.
pub fn nullable_with_null_default() -> Arc<Schema> {
    Schema::shared("NullableTime", vec![time_field().nullable().with_default(Value::Null)])
        .unwrap()
}

/// Record with one nullable timestamp field and no default.
pub fn nullable_without_default() -> Arc<Schema> {
    Schema::shared("NullableTimeNoDefault", vec![time_field().nullable()]).unwrap()
}

/// Record with one nullable timestamp field defaulting to the epoch.
pub fn nullable_with_epoch_default() -> Arc<Schema> {
    Schema::shared(
        "NullableTimeEpochDefault",
        vec![time_field().nullable().with_default(Timestamp::new(0, 0))],
    )
    .unwrap()
}

/// Record with one mandatory timestamp field.
pub fn mandatory() -> Arc<Schema> {
    Schema::shared("MandatoryTime", vec![time_field()]).unwrap()
}

pub fn registry() -> Arc<ConversionRegistry> {
    Arc::new(ConversionRegistry::with_builtins().unwrap())
}

pub fn codec(config: CodecConfig) -> (Encoder, Decoder) {
    let registry = registry();
    (
        Encoder::with_config(registry.clone(), config.clone()),
        Decoder::with_config(registry, config),
    )
}
