/// Error type for conversion registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Conversion '{logical_type}' for {physical:?} already registered")]
    AlreadyRegistered {
        physical: super::PhysicalType,
        logical_type: String,
    },

    #[error("Conversion '{logical_type}' for {physical:?} not found")]
    NotFound {
        physical: super::PhysicalType,
        logical_type: String,
    },
}
