//! Conversion behavior on nullable timestamp fields with and without a
//! null default, under both null-default policies.

use pretty_assertions::assert_eq;

use record_codec_core::config::{CodecConfig, NullDefaultConversion};
use record_codec_core::error::CodecError;
use record_codec_core::record::Record;
use record_codec_core::types::Value;

use super::helpers::*;

fn reject() -> CodecConfig {
    CodecConfig {
        null_default_conversion: NullDefaultConversion::Reject,
        ..Default::default()
    }
}

#[test]
fn test_apply_converts_with_null_default() -> anyhow::Result<()> {
    let (_, decoder) = codec(CodecConfig::default());
    let record = decoder.decode(&nullable_with_null_default(), &BOUNDARY_NULLABLE)?;
    assert_eq!(record.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_apply_converts_without_default() -> anyhow::Result<()> {
    let (_, decoder) = codec(CodecConfig::default());
    let record = decoder.decode(&nullable_without_default(), &BOUNDARY_NULLABLE)?;
    assert_eq!(record.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_reject_fails_with_null_default() {
    let (_, decoder) = codec(reject());
    let err = decoder
        .decode(&nullable_with_null_default(), &BOUNDARY_NULLABLE)
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::ConversionUnbound {
            field: "time".to_string(),
            logical_type: "timestamp-micros".to_string(),
        }
    );
}

#[test]
fn test_reject_still_decodes_null_with_null_default() -> anyhow::Result<()> {
    let (_, decoder) = codec(reject());
    let record = decoder.decode(&nullable_with_null_default(), &[0x00])?;
    assert_eq!(record.get("time"), Some(&Value::Null));
    Ok(())
}

#[test]
fn test_reject_converts_without_default() -> anyhow::Result<()> {
    let (_, decoder) = codec(reject());
    let record = decoder.decode(&nullable_without_default(), &BOUNDARY_NULLABLE)?;
    assert_eq!(record.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_reject_converts_with_non_null_default() -> anyhow::Result<()> {
    let (_, decoder) = codec(reject());
    let schema = nullable_with_epoch_default();
    assert!(!schema.fields()[0].has_null_default());

    let record = decoder.decode(&schema, &BOUNDARY_NULLABLE)?;
    assert_eq!(record.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_reject_does_not_touch_mandatory_fields() -> anyhow::Result<()> {
    let (_, decoder) = codec(reject());
    let record = decoder.decode(&mandatory(), &BOUNDARY_MANDATORY)?;
    assert_eq!(record.get("time"), Some(&Value::Timestamp(boundary_instant())));
    Ok(())
}

#[test]
fn test_encoding_ignores_policy() -> anyhow::Result<()> {
    let (encoder, _) = codec(reject());
    let record = Record::from_values(nullable_with_null_default(), [("time", boundary_instant())])?;
    assert_eq!(encoder.encode(&record)?, BOUNDARY_NULLABLE);
    Ok(())
}

#[test]
fn test_explicit_null_without_default_round_trips() -> anyhow::Result<()> {
    for config in [CodecConfig::default(), reject()] {
        let (encoder, decoder) = codec(config);
        let schema = nullable_without_default();
        let record = Record::from_values(schema.clone(), [("time", Value::Null)])?;
        let bytes = encoder.encode(&record)?;
        assert_eq!(bytes, [0x00]);
        assert_eq!(decoder.decode(&schema, &bytes)?, record);
    }
    Ok(())
}
