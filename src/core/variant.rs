//! Build variants.
//!
//! A variant is a named configuration profile (debug, release, ...)
//! overriding a subset of default build attributes. Variants are
//! declared once at configuration-load time and resolved lazily per
//! request; a resolved variant is a fresh merged value, never a view
//! into the declaration tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known attribute keys.
pub mod attrs {
    /// Signing identity used to sign the output artifact.
    pub const SIGNING_IDENTITY: &str = "signing-identity";

    /// Whether core-library desugaring is enabled.
    pub const DESUGARING_ENABLED: &str = "desugaring-enabled";

    /// Whether multi-artifact splitting is enabled.
    pub const MULTIDEX_ENABLED: &str = "multidex-enabled";

    /// Optimization flags handed to the downstream compiler.
    pub const OPTIMIZATION: &str = "optimization";
}

/// A build attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag
    Bool(bool),
    /// Integer level
    Int(i64),
    /// Free-form string
    Str(String),
}

impl AttrValue {
    /// Get the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

/// A fully merged build variant.
///
/// BTreeMap keeps attribute iteration and serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildVariant {
    /// Variant name
    name: String,

    /// Merged attribute map (defaults overlaid with the variant's overrides)
    attributes: BTreeMap<String, AttrValue>,
}

impl BuildVariant {
    /// Create a variant from an already merged attribute map.
    pub fn new(name: impl Into<String>, attributes: BTreeMap<String, AttrValue>) -> Self {
        BuildVariant {
            name: name.into(),
            attributes,
        }
    }

    /// Get the variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Iterate all attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The signing identity, if one is set.
    pub fn signing_identity(&self) -> Option<&str> {
        self.get(attrs::SIGNING_IDENTITY).and_then(AttrValue::as_str)
    }

    /// Whether core-library desugaring is enabled. Defaults to false.
    pub fn desugaring_enabled(&self) -> bool {
        self.get(attrs::DESUGARING_ENABLED)
            .and_then(AttrValue::as_bool)
            .unwrap_or(false)
    }

    /// Whether multi-artifact splitting is enabled. Defaults to false.
    pub fn multidex_enabled(&self) -> bool {
        self.get(attrs::MULTIDEX_ENABLED)
            .and_then(AttrValue::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let mut attrs_map = BTreeMap::new();
        attrs_map.insert(attrs::SIGNING_IDENTITY.to_string(), AttrValue::from("release-key"));
        attrs_map.insert(attrs::DESUGARING_ENABLED.to_string(), AttrValue::from(true));

        let variant = BuildVariant::new("release", attrs_map);
        assert_eq!(variant.signing_identity(), Some("release-key"));
        assert!(variant.desugaring_enabled());
        assert!(!variant.multidex_enabled());
    }

    #[test]
    fn test_attr_value_untagged_deserialization() {
        let v: AttrValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttrValue::Bool(true));
        let v: AttrValue = serde_json::from_str("\"debug-key\"").unwrap();
        assert_eq!(v.as_str(), Some("debug-key"));
        let v: AttrValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, AttrValue::Int(3));
    }
}
