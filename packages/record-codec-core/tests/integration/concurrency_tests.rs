//! One schema, registry, encoder and decoder shared read-only by many threads.

use std::sync::Arc;
use std::thread;

use ntest::timeout;

use record_codec_core::config::CodecConfig;
use record_codec_core::record::Record;
use record_codec_core::types::{Timestamp, Value};

use super::helpers::*;

#[timeout(5000)]
#[test]
fn test_parallel_round_trips_share_codec() {
    let (encoder, decoder) = codec(CodecConfig::strict());
    let encoder = Arc::new(encoder);
    let decoder = Arc::new(decoder);
    let schema = nullable_with_null_default();

    let handles: Vec<_> = (0..8i64)
        .map(|t| {
            let encoder = Arc::clone(&encoder);
            let decoder = Arc::clone(&decoder);
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                for i in 0..500i64 {
                    let value = if i % 3 == 0 {
                        Value::Null
                    } else {
                        Value::Timestamp(Timestamp::from_micros(t * 1_000_000_007 + i))
                    };
                    let record =
                        Record::from_values(schema.clone(), [("time", value)]).unwrap();
                    let bytes = encoder.encode(&record).unwrap();
                    assert_eq!(decoder.decode(&schema, &bytes).unwrap(), record);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[cfg(feature = "parallel")]
#[timeout(5000)]
#[test]
fn test_batch_round_trip() {
    let (encoder, decoder) = codec(CodecConfig::strict());
    let schema = mandatory();

    let records: Vec<Record> = (0..1000i64)
        .map(|i| {
            Record::from_values(schema.clone(), [("time", Timestamp::from_micros(i * 997))])
                .unwrap()
        })
        .collect();

    let encoded = encoder.encode_batch(&records).unwrap();
    let slices: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
    let decoded = decoder.decode_batch(&schema, &slices).unwrap();
    assert_eq!(decoded, records);
}
