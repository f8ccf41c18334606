//! Field definition within a record schema.

use crate::types::{PhysicalType, Value};

/// Field definition within a record schema.
///
/// A nullable field is modeled on the wire as the two-branch union
/// `{Null, physical}`: branch 0 is null, branch 1 carries the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the schema
    pub name: String,
    /// Wire-level type
    pub physical: PhysicalType,
    /// Whether the field is wrapped in a `{Null, physical}` union
    pub nullable: bool,
    /// Logical type layered over the physical one (e.g., "timestamp-micros")
    pub logical_type: Option<String>,
    /// Value used when a builder never sets the field
    pub default: Option<Value>,
}

impl FieldDescriptor {
    /// Creates a mandatory field with no logical type and no default.
    pub fn new(name: impl Into<String>, physical: PhysicalType) -> Self {
        Self {
            name: name.into(),
            physical,
            nullable: false,
            logical_type: None,
            default: None,
        }
    }

    /// Creates a mandatory `Long` field.
    pub fn long(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Long)
    }

    /// Marks the field as a `{Null, physical}` union.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Attaches a logical type name.
    #[must_use]
    pub fn with_logical_type(mut self, logical_type: impl Into<String>) -> Self {
        self.logical_type = Some(logical_type.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether `Null` is an acceptable value for this field.
    pub fn accepts_null(&self) -> bool {
        self.nullable || self.physical == PhysicalType::Null
    }

    /// Whether the field's default is explicitly `Null`.
    pub fn has_null_default(&self) -> bool {
        matches!(self.default, Some(Value::Null))
    }
}
