//! Nullable and mandatory timestamp records against fixed byte sequences.

use ntest::timeout;
use pretty_assertions::assert_eq;

use record_codec_core::config::CodecConfig;
use record_codec_core::error::CodecError;
use record_codec_core::record::{Record, RecordBuilder};
use record_codec_core::types::Value;

use super::helpers::*;

#[test]
fn test_nullable_serialize_round_trip() -> anyhow::Result<()> {
    let (encoder, decoder) = codec(CodecConfig::default());
    let schema = nullable_with_null_default();

    let record = Record::builder(schema.clone())
        .set("time", boundary_instant())?
        .build()?;
    let bytes = encoder.encode(&record)?;
    assert_eq!(bytes, BOUNDARY_NULLABLE);

    let other = decoder.decode(&schema, &bytes)?;
    assert_eq!(record, other);
    Ok(())
}

#[test]
fn test_nullable_deserialize_fixed_bytes() -> anyhow::Result<()> {
    let (_, decoder) = codec(CodecConfig::default());

    let actual = decoder.decode(&nullable_with_null_default(), &BOUNDARY_NULLABLE)?;
    assert_eq!(actual.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_nullable_null_round_trip() -> anyhow::Result<()> {
    let (encoder, decoder) = codec(CodecConfig::default());
    let schema = nullable_with_null_default();

    let record = Record::builder(schema.clone())
        .set("time", Value::Null)?
        .build()?;
    let bytes = encoder.encode(&record)?;
    assert_eq!(bytes, [0x00]);
    assert_eq!(decoder.decode(&schema, &bytes)?, record);
    Ok(())
}

#[test]
fn test_nullable_unset_uses_null_default() -> anyhow::Result<()> {
    let (encoder, _) = codec(CodecConfig::default());
    let record = RecordBuilder::new(nullable_with_null_default()).build()?;
    assert_eq!(record.get("time"), Some(&Value::Null));
    assert_eq!(encoder.encode(&record)?, [0x00]);
    Ok(())
}

#[test]
fn test_nullable_null_deserialize() -> anyhow::Result<()> {
    let (_, decoder) = codec(CodecConfig::default());
    let actual = decoder.decode(&nullable_with_null_default(), &[0x00])?;
    assert_eq!(actual.get("time"), Some(&Value::Null));
    Ok(())
}

#[test]
fn test_mandatory_serialize_round_trip() -> anyhow::Result<()> {
    let (encoder, decoder) = codec(CodecConfig::default());
    let schema = mandatory();

    let record = Record::builder(schema.clone())
        .set("time", boundary_instant())?
        .build()?;
    let bytes = encoder.encode(&record)?;
    assert_eq!(bytes, BOUNDARY_MANDATORY);
    assert_eq!(decoder.decode(&schema, &bytes)?, record);
    Ok(())
}

#[test]
fn test_mandatory_deserialize_fixed_bytes() -> anyhow::Result<()> {
    let (_, decoder) = codec(CodecConfig::default());
    let actual = decoder.decode(&mandatory(), &BOUNDARY_MANDATORY)?;
    assert_eq!(actual.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
#[timeout(1000)]
fn test_mandatory_rejects_null() {
    let err = Record::builder(mandatory())
        .set("time", Value::Null)
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::NullNotAllowed {
            field: "time".to_string()
        }
    );
}

#[test]
#[timeout(1000)]
fn test_mandatory_unset_is_missing() {
    let err = Record::builder(mandatory()).build().unwrap_err();
    assert!(matches!(err, CodecError::MissingField { field } if field == "time"));
}

#[test]
fn test_sub_microsecond_nanos_truncate() -> anyhow::Result<()> {
    let (encoder, decoder) = codec(CodecConfig::default());
    let schema = mandatory();
    let precise = boundary_instant();
    let noisy = record_codec_core::types::Timestamp::new(precise.seconds(), precise.nanos() + 999);

    let record = Record::builder(schema.clone()).set("time", noisy)?.build()?;
    let bytes = encoder.encode(&record)?;
    assert_eq!(bytes, BOUNDARY_MANDATORY);

    let decoded = decoder.decode(&schema, &bytes)?;
    assert_eq!(decoded.get("time"), Some(&Value::Timestamp(noisy.truncate_to_micros())));
    assert_ne!(decoded, record);
    Ok(())
}
