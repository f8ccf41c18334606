use std::collections::HashMap;

use super::builtin_conversions::register_builtin_conversions;
use super::conversion::Conversion;
use super::error::ConversionError;
use super::PhysicalType;

/// Registry for logical-type conversions.
///
/// Stores conversions keyed by `(physical type, logical type name)`.
/// Registration needs `&mut self`, so once the registry is wrapped in an
/// `Arc` and handed to an encoder or decoder its entries are fixed and
/// lookups take no lock. Lookup is exact; a missing entry means values pass
/// through unconverted.
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    conversions: HashMap<PhysicalType, HashMap<String, Conversion>>,
}

impl ConversionRegistry {
    /// Creates a new empty conversion registry.
    pub fn new() -> Self {
        Self {
            conversions: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in conversions registered.
    pub fn with_builtins() -> Result<Self, ConversionError> {
        let mut registry = Self::new();
        register_builtin_conversions(&mut registry)?;
        Ok(registry)
    }

    /// Registers a conversion.
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(ConversionError)` if the key is taken.
    pub fn register(&mut self, conversion: Conversion) -> Result<(), ConversionError> {
        let by_name = self.conversions.entry(conversion.physical).or_default();
        if by_name.contains_key(&conversion.logical_type) {
            return Err(ConversionError::AlreadyRegistered {
                physical: conversion.physical,
                logical_type: conversion.logical_type.clone(),
            });
        }

        tracing::debug!(
            physical = ?conversion.physical,
            logical_type = %conversion.logical_type,
            "Registered logical type conversion"
        );
        by_name.insert(conversion.logical_type.clone(), conversion);
        Ok(())
    }

    /// Retrieves the conversion for a key.
    ///
    /// # Returns
    /// `Some(&Conversion)` if found, `None` otherwise.
    pub fn lookup(&self, physical: PhysicalType, logical_type: &str) -> Option<&Conversion> {
        self.conversions.get(&physical)?.get(logical_type)
    }

    /// Retrieves the conversion for a key, failing if absent.
    pub fn require(
        &self,
        physical: PhysicalType,
        logical_type: &str,
    ) -> Result<&Conversion, ConversionError> {
        self.lookup(physical, logical_type)
            .ok_or_else(|| ConversionError::NotFound {
                physical,
                logical_type: logical_type.to_string(),
            })
    }

    /// Checks if a conversion is registered.
    pub fn contains(&self, physical: PhysicalType, logical_type: &str) -> bool {
        self.lookup(physical, logical_type).is_some()
    }

    /// Returns all registered keys.
    pub fn logical_types(&self) -> Vec<(PhysicalType, String)> {
        self.conversions
            .iter()
            .flat_map(|(physical, by_name)| by_name.keys().map(|name| (*physical, name.clone())))
            .collect()
    }

    /// Removes a conversion.
    ///
    /// # Returns
    /// `true` if the conversion was removed, `false` if it wasn't found.
    pub fn remove(&mut self, physical: PhysicalType, logical_type: &str) -> bool {
        self.conversions
            .get_mut(&physical)
            .and_then(|by_name| by_name.remove(logical_type))
            .is_some()
    }
}
