use super::conversion::Conversion;
use super::conversion_registry::ConversionRegistry;
use super::error::ConversionError;
use super::{PhysicalType, Timestamp, Value, TIMESTAMP_MICROS};

/// Microseconds since the epoch to a [`Value::Timestamp`].
fn micros_to_logical(micros: i64) -> Value {
    Value::Timestamp(Timestamp::from_micros(micros))
}

/// [`Value::Timestamp`] to microseconds since the epoch.
///
/// Sub-microsecond nanos are truncated, not rejected.
fn micros_to_physical(value: &Value) -> Option<i64> {
    value.as_timestamp()?.to_micros()
}

/// Registers the `timestamp-micros` conversion over `Long`.
pub fn register_timestamp_micros(registry: &mut ConversionRegistry) -> Result<(), ConversionError> {
    registry.register(Conversion::new(
        PhysicalType::Long,
        TIMESTAMP_MICROS,
        micros_to_logical,
        micros_to_physical,
    ))
}

/// Registers all built-in conversions in the registry.
///
/// # Returns
/// `Ok(())` if all conversions registered successfully.
pub fn register_builtin_conversions(registry: &mut ConversionRegistry) -> Result<(), ConversionError> {
    register_timestamp_micros(registry)?;
    Ok(())
}
