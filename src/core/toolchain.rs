//! Toolchain version identifiers.
//!
//! A build targets several versioned levels at once: the language level
//! sources are written against, the level emitted bytecode targets, and
//! the SDK levels the application compiles against and runs on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a toolchain version constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionKind {
    /// Language level source files are written against
    SourceLevel,
    /// Language level emitted output targets
    TargetLevel,
    /// SDK level the application is compiled against
    CompileSdk,
    /// Lowest SDK level the application runs on
    MinimumSdk,
    /// SDK level the application is tested against and declares support for
    TargetSdk,
}

impl VersionKind {
    /// All kinds, in resolution order.
    pub const ALL: [VersionKind; 5] = [
        VersionKind::SourceLevel,
        VersionKind::TargetLevel,
        VersionKind::CompileSdk,
        VersionKind::MinimumSdk,
        VersionKind::TargetSdk,
    ];

    /// The kebab-case name used in configuration and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionKind::SourceLevel => "source-level",
            VersionKind::TargetLevel => "target-level",
            VersionKind::CompileSdk => "compile-sdk",
            VersionKind::MinimumSdk => "minimum-sdk",
            VersionKind::TargetSdk => "target-sdk",
        }
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated toolchain version: one kind, one integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainVersion {
    kind: VersionKind,
    level: u32,
}

impl ToolchainVersion {
    /// Create a toolchain version.
    ///
    /// This does not validate the level against any supported range;
    /// validation is the version registry's job.
    pub fn new(kind: VersionKind, level: u32) -> Self {
        ToolchainVersion { kind, level }
    }

    /// What this version constrains.
    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    /// The integer level.
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.level)
    }
}

/// The complete set of toolchain versions a resolved plan carries.
///
/// Invariant (enforced by the resolver, not this type):
/// minimum-sdk <= target-sdk <= compile-sdk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainSet {
    /// Language source level
    pub source_level: ToolchainVersion,
    /// Language target level
    pub target_level: ToolchainVersion,
    /// Compile SDK level
    pub compile_sdk: ToolchainVersion,
    /// Minimum supported SDK level
    pub minimum_sdk: ToolchainVersion,
    /// Target SDK level
    pub target_sdk: ToolchainVersion,
}

impl ToolchainSet {
    /// Check the cross-field SDK ordering invariant.
    pub fn sdk_ordering_ok(&self) -> bool {
        self.minimum_sdk.level() <= self.target_sdk.level()
            && self.target_sdk.level() <= self.compile_sdk.level()
    }

    /// Look up a version by kind.
    pub fn get(&self, kind: VersionKind) -> ToolchainVersion {
        match kind {
            VersionKind::SourceLevel => self.source_level,
            VersionKind::TargetLevel => self.target_level,
            VersionKind::CompileSdk => self.compile_sdk,
            VersionKind::MinimumSdk => self.minimum_sdk,
            VersionKind::TargetSdk => self.target_sdk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(min: u32, target: u32, compile: u32) -> ToolchainSet {
        ToolchainSet {
            source_level: ToolchainVersion::new(VersionKind::SourceLevel, 8),
            target_level: ToolchainVersion::new(VersionKind::TargetLevel, 8),
            compile_sdk: ToolchainVersion::new(VersionKind::CompileSdk, compile),
            minimum_sdk: ToolchainVersion::new(VersionKind::MinimumSdk, min),
            target_sdk: ToolchainVersion::new(VersionKind::TargetSdk, target),
        }
    }

    #[test]
    fn test_sdk_ordering() {
        assert!(set(23, 35, 35).sdk_ordering_ok());
        assert!(set(23, 23, 23).sdk_ordering_ok());
        assert!(!set(35, 23, 35).sdk_ordering_ok());
        assert!(!set(23, 36, 35).sdk_ordering_ok());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&VersionKind::MinimumSdk).unwrap();
        assert_eq!(json, "\"minimum-sdk\"");
    }
}
