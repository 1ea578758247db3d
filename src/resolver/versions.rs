//! Toolchain version registry.
//!
//! The registry knows, per version kind, which integer levels are
//! supported and which level to assume when a configuration leaves the
//! kind unrequested. It is read-only after construction, so concurrent
//! resolutions can share one registry without locking.

use std::collections::BTreeMap;

use crate::core::toolchain::{ToolchainVersion, VersionKind};
use crate::resolver::errors::ResolveError;

/// Supported range and fallback level for one version kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SupportedRange {
    min: u32,
    max: u32,
    default: u32,
}

/// Registry of known toolchain version ranges.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    ranges: BTreeMap<VersionKind, SupportedRange>,
}

impl VersionRegistry {
    /// Registry with the stock supported ranges: language levels 8
    /// through 21, SDK levels 1 through 36, defaulting to a level-8
    /// language profile compiled against SDK 35 with a floor of 23.
    pub fn with_defaults() -> Self {
        let mut ranges = BTreeMap::new();
        ranges.insert(
            VersionKind::SourceLevel,
            SupportedRange { min: 8, max: 21, default: 8 },
        );
        ranges.insert(
            VersionKind::TargetLevel,
            SupportedRange { min: 8, max: 21, default: 8 },
        );
        ranges.insert(
            VersionKind::CompileSdk,
            SupportedRange { min: 1, max: 36, default: 35 },
        );
        ranges.insert(
            VersionKind::MinimumSdk,
            SupportedRange { min: 1, max: 36, default: 23 },
        );
        ranges.insert(
            VersionKind::TargetSdk,
            SupportedRange { min: 1, max: 36, default: 35 },
        );
        VersionRegistry { ranges }
    }

    /// Override the supported range and default for one kind.
    pub fn with_range(mut self, kind: VersionKind, min: u32, max: u32, default: u32) -> Self {
        debug_assert!(min <= default && default <= max);
        self.ranges.insert(kind, SupportedRange { min, max, default });
        self
    }

    /// The level assumed when a configuration does not request `kind`.
    pub fn default_level(&self, kind: VersionKind) -> u32 {
        self.ranges[&kind].default
    }

    /// Validate a requested level against the supported range.
    pub fn validate(&self, kind: VersionKind, requested: u32) -> Result<ToolchainVersion, ResolveError> {
        let range = self.ranges[&kind];
        if requested < range.min || requested > range.max {
            return Err(ResolveError::UnsupportedVersion {
                kind,
                requested,
                min: range.min,
                max: range.max,
            });
        }
        Ok(ToolchainVersion::new(kind, requested))
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        VersionRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_range() {
        let registry = VersionRegistry::with_defaults();
        let version = registry.validate(VersionKind::MinimumSdk, 23).unwrap();
        assert_eq!(version.kind(), VersionKind::MinimumSdk);
        assert_eq!(version.level(), 23);
    }

    #[test]
    fn test_validate_out_of_range() {
        let registry = VersionRegistry::with_defaults();
        let err = registry.validate(VersionKind::CompileSdk, 99).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedVersion {
                kind: VersionKind::CompileSdk,
                requested: 99,
                min: 1,
                max: 36,
            }
        );
    }

    #[test]
    fn test_custom_range_overrides_stock() {
        let registry =
            VersionRegistry::with_defaults().with_range(VersionKind::CompileSdk, 30, 34, 34);
        assert!(registry.validate(VersionKind::CompileSdk, 35).is_err());
        assert!(registry.validate(VersionKind::CompileSdk, 34).is_ok());
        assert_eq!(registry.default_level(VersionKind::CompileSdk), 34);
    }
}
