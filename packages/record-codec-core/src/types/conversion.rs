use std::sync::Arc;

use super::{PhysicalType, Value};

/// Type alias for the physical-to-logical function signature.
pub type ToLogicalFn = dyn Fn(i64) -> Value + Send + Sync;

/// Type alias for the logical-to-physical function signature.
///
/// Returns `None` when the value is not of the logical type this conversion
/// handles, or cannot be represented physically.
pub type ToPhysicalFn = dyn Fn(&Value) -> Option<i64> + Send + Sync;

/// A pair of pure functions mapping a physical value to and from its
/// logical representation.
///
/// Keyed in the registry by `(physical, logical_type)`.
#[derive(Clone)]
pub struct Conversion {
    /// Wire-level type the conversion applies to
    pub physical: PhysicalType,
    /// Logical type name (e.g., "timestamp-micros")
    pub logical_type: String,
    /// Physical to logical
    pub to_logical: Arc<ToLogicalFn>,
    /// Logical to physical
    pub to_physical: Arc<ToPhysicalFn>,
}

impl std::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversion")
            .field("physical", &self.physical)
            .field("logical_type", &self.logical_type)
            .finish_non_exhaustive()
    }
}

impl Conversion {
    /// Creates a new conversion.
    ///
    /// # Arguments
    /// * `physical` - Physical type the conversion reads and writes
    /// * `logical_type` - Logical type name
    /// * `to_logical` - Function from the physical integer to the logical value
    /// * `to_physical` - Function from the logical value back to the integer
    pub fn new(
        physical: PhysicalType,
        logical_type: impl Into<String>,
        to_logical: impl Fn(i64) -> Value + Send + Sync + 'static,
        to_physical: impl Fn(&Value) -> Option<i64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            physical,
            logical_type: logical_type.into(),
            to_logical: Arc::new(to_logical),
            to_physical: Arc::new(to_physical),
        }
    }

    /// Applies the physical-to-logical function.
    pub fn to_logical(&self, physical: i64) -> Value {
        (self.to_logical)(physical)
    }

    /// Applies the logical-to-physical function.
    pub fn to_physical(&self, logical: &Value) -> Option<i64> {
        (self.to_physical)(logical)
    }
}
