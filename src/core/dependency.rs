//! Dependency declarations.
//!
//! A dependency declaration names an external artifact by coordinate,
//! assigns it a role (how it participates in the build), and carries a
//! minimum version constraint. Declarations are validated for duplicate
//! coordinates and role conflicts by the resolver's dependency set.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

/// An artifact coordinate: a group/artifact pair.
///
/// Written as `group:artifact`, or a bare artifact name when the group
/// is implicit. Two coordinates identify the same artifact when both
/// parts match; the declared version is a constraint, not identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    group: String,
    artifact: String,
}

impl Coordinate {
    /// Create a coordinate from explicit group and artifact parts.
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// The group part, empty when the group is implicit.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact part.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((group, artifact)) => {
                if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
                    Err(format!("malformed coordinate `{}`", s))
                } else {
                    Ok(Coordinate::new(group, artifact))
                }
            }
            None if s.is_empty() => Err("empty coordinate".to_string()),
            None => Ok(Coordinate::new("", s)),
        }
    }
}

impl TryFrom<String> for Coordinate {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coordinate> for String {
    fn from(c: Coordinate) -> String {
        c.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.artifact)
        } else {
            write!(f, "{}:{}", self.group, self.artifact)
        }
    }
}

/// How a dependency participates in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyRole {
    /// Compile-time-only augmentation (e.g. a desugaring runtime);
    /// never linked into the running application directly
    CompileAugmentation,
    /// Linked into the application at runtime
    RuntimeLinked,
}

impl DependencyRole {
    /// The kebab-case name used in configuration and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyRole::CompileAugmentation => "compile-augmentation",
            DependencyRole::RuntimeLinked => "runtime-linked",
        }
    }
}

impl fmt::Display for DependencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    /// Artifact coordinate
    pub coordinate: Coordinate,

    /// Role in the build
    pub role: DependencyRole,

    /// Minimum acceptable version
    #[serde(rename = "version")]
    pub min_version: Version,
}

impl DependencyDeclaration {
    /// Create a dependency declaration.
    pub fn new(coordinate: Coordinate, role: DependencyRole, min_version: Version) -> Self {
        DependencyDeclaration {
            coordinate,
            role,
            min_version,
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.coordinate, self.min_version, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_parses_group_and_artifact() {
        let c: Coordinate = "com.android.tools:desugar_jdk_libs".parse().unwrap();
        assert_eq!(c.group(), "com.android.tools");
        assert_eq!(c.artifact(), "desugar_jdk_libs");
        assert_eq!(c.to_string(), "com.android.tools:desugar_jdk_libs");
    }

    #[test]
    fn test_coordinate_bare_artifact() {
        let c: Coordinate = "desugar-lib".parse().unwrap();
        assert_eq!(c.group(), "");
        assert_eq!(c.artifact(), "desugar-lib");
        assert_eq!(c.to_string(), "desugar-lib");
    }

    #[test]
    fn test_coordinate_rejects_malformed() {
        assert!("".parse::<Coordinate>().is_err());
        assert!(":artifact".parse::<Coordinate>().is_err());
        assert!("group:".parse::<Coordinate>().is_err());
        assert!("a:b:c".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_declaration_deserializes_from_config_shape() {
        let decl: DependencyDeclaration = serde_json::from_str(
            r#"{"coordinate": "androidx.multidex:multidex", "role": "runtime-linked", "version": "2.0.1"}"#,
        )
        .unwrap();
        assert_eq!(decl.role, DependencyRole::RuntimeLinked);
        assert_eq!(decl.min_version, Version::new(2, 0, 1));
    }
}
