//! Variant override resolution.
//!
//! A variant table holds the shared default attributes and the
//! per-variant override maps. Resolving a variant merges the two into a
//! fresh value: overrides win per attribute, everything else keeps the
//! default. The tables themselves are never mutated.

use std::collections::BTreeMap;

use tracing::trace;

use crate::core::variant::{AttrValue, BuildVariant};
use crate::resolver::errors::ResolveError;

/// Declared variant tables: defaults plus per-variant overrides.
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    defaults: BTreeMap<String, AttrValue>,
    overrides: BTreeMap<String, BTreeMap<String, AttrValue>>,
}

impl VariantTable {
    /// Build a table from default attributes and named override maps.
    pub fn new(
        defaults: BTreeMap<String, AttrValue>,
        overrides: BTreeMap<String, BTreeMap<String, AttrValue>>,
    ) -> Self {
        VariantTable {
            defaults,
            overrides,
        }
    }

    /// Names of all declared variants, in sorted order.
    pub fn known_variants(&self) -> Vec<String> {
        self.overrides.keys().cloned().collect()
    }

    /// Resolve a variant by name into a fully merged value.
    pub fn resolve_variant(&self, name: &str) -> Result<BuildVariant, ResolveError> {
        let Some(overrides) = self.overrides.get(name) else {
            return Err(ResolveError::UnknownVariant {
                name: name.to_string(),
                known: self.known_variants(),
            });
        };

        let mut merged = self.defaults.clone();
        for (key, value) in overrides {
            trace!(variant = name, attribute = %key, value = %value, "override supersedes default");
            merged.insert(key.clone(), value.clone());
        }

        Ok(BuildVariant::new(name, merged))
    }
}
