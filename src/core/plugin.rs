//! Plugin declarations.
//!
//! A plugin declaration names a build-system plugin to apply, plus an
//! optional ordering hint listing plugins that must be applied first.
//! Application order is an explicit contract, not an accident of
//! declaration order: the plugin set resolver sorts hints topologically
//! and breaks ties by input position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A declared plugin application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDeclaration {
    /// Unique plugin identifier
    pub id: String,

    /// Plugins that must be applied before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after: Vec<String>,
}

impl PluginDeclaration {
    /// Declare a plugin with no ordering hint.
    pub fn new(id: impl Into<String>) -> Self {
        PluginDeclaration {
            id: id.into(),
            after: Vec::new(),
        }
    }

    /// Add plugins that must be applied before this one.
    pub fn after<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.after.extend(ids.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for PluginDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.after.is_empty() {
            write!(f, " (after {})", self.after.join(", "))?;
        }
        Ok(())
    }
}

/// Plugin declaration as it appears in a raw configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    /// Bare identifier: `"application"`
    Simple(String),

    /// Identifier with an ordering hint
    Detailed(PluginDeclaration),
}

impl PluginSpec {
    /// Convert to a PluginDeclaration.
    pub fn to_declaration(&self) -> PluginDeclaration {
        match self {
            PluginSpec::Simple(id) => PluginDeclaration::new(id.clone()),
            PluginSpec::Detailed(decl) => decl.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_builder() {
        let decl = PluginDeclaration::new("language-toolchain").after(["application"]);
        assert_eq!(decl.id, "language-toolchain");
        assert_eq!(decl.after, vec!["application".to_string()]);
    }

    #[test]
    fn test_spec_simple_deserializes_from_bare_string() {
        let spec: PluginSpec = serde_json::from_str("\"application\"").unwrap();
        let decl = spec.to_declaration();
        assert_eq!(decl.id, "application");
        assert!(decl.after.is_empty());
    }

    #[test]
    fn test_spec_detailed_deserializes_with_hint() {
        let spec: PluginSpec =
            serde_json::from_str(r#"{"id": "cloud-services", "after": ["application"]}"#).unwrap();
        let decl = spec.to_declaration();
        assert_eq!(decl.after, vec!["application".to_string()]);
    }
}
