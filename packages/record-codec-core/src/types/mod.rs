//! Physical types, values, logical-type conversions and their registry.

mod builtin_conversions;
mod conversion;
mod conversion_registry;
mod error;
mod timestamp;
mod value;

pub use builtin_conversions::{register_builtin_conversions, register_timestamp_micros};
pub use conversion::{Conversion, ToLogicalFn, ToPhysicalFn};
pub use conversion_registry::ConversionRegistry;
pub use error::ConversionError;
pub use timestamp::Timestamp;
pub use value::{PhysicalType, Value};

/// Logical type name for microsecond-precision timestamps over `Long`.
pub const TIMESTAMP_MICROS: &str = "timestamp-micros";
