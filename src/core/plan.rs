//! Resolved build plans.
//!
//! A ResolvedBuildPlan is the engine's only output: a frozen snapshot of
//! every decision resolution made. It is a plain value with no
//! back-references, so callers may clone it, send it across threads, or
//! serialize it for a downstream packager without synchronization.

use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencyDeclaration;
use crate::core::plugin::PluginDeclaration;
use crate::core::toolchain::ToolchainSet;
use crate::core::variant::BuildVariant;

/// Application identity carried through to the packager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application identifier
    pub app_id: String,
    /// Code namespace
    pub namespace: String,
    /// Monotonic release counter
    pub version_code: u32,
    /// Human-readable version
    pub version_name: String,
}

/// A complete, validated build plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBuildPlan {
    /// Application identity
    pub metadata: AppMetadata,

    /// Validated toolchain versions
    pub toolchain: ToolchainSet,

    /// Plugins in application order
    pub plugins: Vec<PluginDeclaration>,

    /// The selected variant, fully merged with defaults
    pub variant: BuildVariant,

    /// Validated dependency declarations, sorted by coordinate
    pub dependencies: Vec<DependencyDeclaration>,
}

impl ResolvedBuildPlan {
    /// Serialize the plan to JSON for a downstream consumer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a plan previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::core::dependency::{Coordinate, DependencyRole};
    use crate::core::toolchain::{ToolchainVersion, VersionKind};
    use crate::core::variant::AttrValue;

    fn sample_plan() -> ResolvedBuildPlan {
        let mut attrs = BTreeMap::new();
        attrs.insert("signing-identity".to_string(), AttrValue::from("debug-key"));

        ResolvedBuildPlan {
            metadata: AppMetadata {
                app_id: "com.example.app".to_string(),
                namespace: "com.example.app".to_string(),
                version_code: 1,
                version_name: "1.0".to_string(),
            },
            toolchain: ToolchainSet {
                source_level: ToolchainVersion::new(VersionKind::SourceLevel, 8),
                target_level: ToolchainVersion::new(VersionKind::TargetLevel, 8),
                compile_sdk: ToolchainVersion::new(VersionKind::CompileSdk, 35),
                minimum_sdk: ToolchainVersion::new(VersionKind::MinimumSdk, 23),
                target_sdk: ToolchainVersion::new(VersionKind::TargetSdk, 35),
            },
            plugins: vec![PluginDeclaration::new("application")],
            variant: BuildVariant::new("release", attrs),
            dependencies: vec![DependencyDeclaration::new(
                Coordinate::new("com.android.tools", "desugar_jdk_libs"),
                DependencyRole::CompileAugmentation,
                semver::Version::new(2, 1, 4),
            )],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let plan = sample_plan();
        let json = plan.to_json().unwrap();
        let back = ResolvedBuildPlan::from_json(&json).unwrap();
        assert_eq!(plan, back);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let plan = sample_plan();
        assert_eq!(plan.to_json().unwrap(), plan.clone().to_json().unwrap());
    }
}
