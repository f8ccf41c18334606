//! Codec configuration.

use serde::{Deserialize, Serialize};

/// How the decoder treats a logical conversion on a nullable field whose
/// default is `Null`.
///
/// Some record runtimes fail to bind the conversion to such a field and hand
/// back the raw physical value. This codec never does that silently; it
/// either converts or refuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullDefaultConversion {
    /// Apply the conversion regardless of the field's default
    #[default]
    Apply,
    /// Fail with `ConversionUnbound` when a present value would need converting
    Reject,
}

/// Codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Fail decoding when bytes remain after the last field
    pub strict: bool,
    /// Policy for conversions on null-defaulted nullable fields
    pub null_default_conversion: NullDefaultConversion,
    /// Initial encoder output capacity in bytes
    pub initial_buffer_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict: false,
            null_default_conversion: NullDefaultConversion::Apply,
            initial_buffer_capacity: 16,
        }
    }
}

impl CodecConfig {
    /// Default configuration with exact-consumption decoding.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }
}
