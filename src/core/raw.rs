//! Raw configuration input.
//!
//! The caller constructs a `RawConfig` from whatever declarative source
//! format it uses; parsing that format is out of scope here. The record
//! deserializes with serde, so TOML/JSON front ends fall out for free.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencyDeclaration;
use crate::core::plugin::PluginSpec;
use crate::core::toolchain::VersionKind;
use crate::core::variant::AttrValue;

fn default_version_code() -> u32 {
    1
}

fn default_version_name() -> String {
    "1.0".to_string()
}

fn default_variant() -> String {
    "debug".to_string()
}

/// A raw, unresolved build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// Application identifier (e.g. `com.example.info_sphere`)
    pub app_id: String,

    /// Code namespace; defaults to the application identifier
    #[serde(default)]
    pub namespace: Option<String>,

    /// Monotonic release counter
    #[serde(default = "default_version_code")]
    pub version_code: u32,

    /// Human-readable version
    #[serde(default = "default_version_name")]
    pub version_name: String,

    /// Plugins to apply, in declaration order
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,

    /// Requested toolchain versions by kind; kinds left out fall back
    /// to the version registry's defaults
    #[serde(default)]
    pub toolchain: BTreeMap<VersionKind, u32>,

    /// Variant to resolve
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Default build attributes shared by all variants
    #[serde(default)]
    pub defaults: BTreeMap<String, AttrValue>,

    /// Per-variant attribute overrides, keyed by variant name
    #[serde(default)]
    pub variants: BTreeMap<String, BTreeMap<String, AttrValue>>,

    /// Declared dependencies
    #[serde(default)]
    pub dependencies: Vec<DependencyDeclaration>,
}

impl RawConfig {
    /// Create a minimal configuration for the given application id.
    pub fn new(app_id: impl Into<String>) -> Self {
        RawConfig {
            app_id: app_id.into(),
            namespace: None,
            version_code: default_version_code(),
            version_name: default_version_name(),
            plugins: Vec::new(),
            toolchain: BTreeMap::new(),
            variant: default_variant(),
            defaults: BTreeMap::new(),
            variants: BTreeMap::new(),
            dependencies: Vec::new(),
        }
    }

    /// The effective code namespace.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_in() {
        let config: RawConfig = serde_json::from_str(r#"{"app_id": "com.example.app"}"#).unwrap();
        assert_eq!(config.version_code, 1);
        assert_eq!(config.version_name, "1.0");
        assert_eq!(config.variant, "debug");
        assert_eq!(config.namespace(), "com.example.app");
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_toolchain_keys_are_kinds() {
        let config: RawConfig = serde_json::from_str(
            r#"{"app_id": "a", "toolchain": {"minimum-sdk": 23, "compile-sdk": 35}}"#,
        )
        .unwrap();
        assert_eq!(config.toolchain.get(&VersionKind::MinimumSdk), Some(&23));
        assert_eq!(config.toolchain.get(&VersionKind::CompileSdk), Some(&35));
    }
}
