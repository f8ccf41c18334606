//! Binary encoder and decoder.
//!
//! Wire format: field encodings concatenated in schema order, with no length
//! prefix, field tags or framing.
//!
//! | Field                | Bytes                                           |
//! |----------------------|-------------------------------------------------|
//! | mandatory `Long`     | zig-zag varint                                  |
//! | nullable `Long`      | selector `0x00` (null) or `0x02` then varint    |
//! | mandatory `Null`     | nothing                                         |
//!
//! Logical values are converted to and from their physical integer through
//! the [`ConversionRegistry`] handed to the encoder or decoder.

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use crate::schema::FieldDescriptor;
use crate::types::{Conversion, ConversionRegistry};

/// Union branch selector for `Null`.
pub const NULL_BRANCH: i64 = 0;

/// Union branch selector for the physical value.
pub const VALUE_BRANCH: i64 = 1;

/// Finds the conversion bound to `field`, if it declares a logical type.
///
/// A logical type name with no registered conversion passes through.
pub(crate) fn resolve_conversion<'a>(
    registry: &'a ConversionRegistry,
    field: &FieldDescriptor,
) -> Option<&'a Conversion> {
    let logical_type = field.logical_type.as_deref()?;
    let conversion = registry.lookup(field.physical, logical_type);
    if conversion.is_none() {
        tracing::debug!(
            field = %field.name,
            logical_type,
            "No conversion registered, using physical value"
        );
    }
    conversion
}
