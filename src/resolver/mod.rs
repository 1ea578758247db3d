//! Build-configuration resolution.
//!
//! The resolver is pure and deterministic: it takes a raw configuration
//! and either returns a complete, immutable [`ResolvedBuildPlan`] or the
//! first error encountered, with no partial plan and no retained state.
//! Each call is a fresh invocation, so concurrent resolutions over a
//! shared resolver are safe without locking.

pub mod deps;
pub mod errors;
pub mod plugins;
pub mod variants;
pub mod versions;

pub use errors::ResolveError;
pub use plugins::{resolve_plugins, PluginRegistry};
pub use versions::VersionRegistry;

use tracing::{debug, warn};

use crate::core::dependency::DependencyRole;
use crate::core::plan::{AppMetadata, ResolvedBuildPlan};
use crate::core::raw::RawConfig;
use crate::core::toolchain::{ToolchainSet, VersionKind};
use crate::resolver::deps::DependencySet;
use crate::resolver::variants::VariantTable;

/// Resolves raw configurations against fixed registries.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    versions: VersionRegistry,
    plugins: PluginRegistry,
}

impl ConfigResolver {
    /// Resolver backed by the stock version ranges and plugin allow-list.
    pub fn new() -> Self {
        ConfigResolver {
            versions: VersionRegistry::with_defaults(),
            plugins: PluginRegistry::with_defaults(),
        }
    }

    /// Resolver backed by custom registries.
    pub fn with_registries(versions: VersionRegistry, plugins: PluginRegistry) -> Self {
        ConfigResolver { versions, plugins }
    }

    /// Resolve a raw configuration into a build plan.
    ///
    /// Validation runs in a fixed order - toolchain versions, plugin
    /// set, variant, dependencies - and short-circuits on the first
    /// failure, returning that error verbatim.
    pub fn resolve(&self, config: &RawConfig) -> Result<ResolvedBuildPlan, ResolveError> {
        debug!(app_id = %config.app_id, variant = %config.variant, "resolving configuration");

        let toolchain = self.resolve_toolchain(config)?;
        debug!(
            minimum = toolchain.minimum_sdk.level(),
            target = toolchain.target_sdk.level(),
            compile = toolchain.compile_sdk.level(),
            "toolchain validated"
        );

        let declared: Vec<_> = config.plugins.iter().map(|s| s.to_declaration()).collect();
        let plugins = resolve_plugins(&declared, &self.plugins)?;
        debug!(count = plugins.len(), "plugin set resolved");

        let table = VariantTable::new(config.defaults.clone(), config.variants.clone());
        let variant = table.resolve_variant(&config.variant)?;

        let mut set = DependencySet::new();
        for decl in &config.dependencies {
            set.add(decl.clone())?;
        }
        let dependencies = set.finalize()?;
        debug!(count = dependencies.len(), "dependency set finalized");

        // Desugaring needs a compile-time augmentation library to back
        // it. Advisory only: the packager may source one elsewhere.
        if variant.desugaring_enabled()
            && !dependencies
                .iter()
                .any(|d| d.role == DependencyRole::CompileAugmentation)
        {
            warn!(
                variant = variant.name(),
                "desugaring is enabled but no compile-augmentation dependency is declared"
            );
        }

        Ok(ResolvedBuildPlan {
            metadata: AppMetadata {
                app_id: config.app_id.clone(),
                namespace: config.namespace().to_string(),
                version_code: config.version_code,
                version_name: config.version_name.clone(),
            },
            toolchain,
            plugins,
            variant,
            dependencies,
        })
    }

    fn resolve_toolchain(&self, config: &RawConfig) -> Result<ToolchainSet, ResolveError> {
        let level = |kind: VersionKind| {
            let requested = config
                .toolchain
                .get(&kind)
                .copied()
                .unwrap_or_else(|| self.versions.default_level(kind));
            self.versions.validate(kind, requested)
        };

        let set = ToolchainSet {
            source_level: level(VersionKind::SourceLevel)?,
            target_level: level(VersionKind::TargetLevel)?,
            compile_sdk: level(VersionKind::CompileSdk)?,
            minimum_sdk: level(VersionKind::MinimumSdk)?,
            target_sdk: level(VersionKind::TargetSdk)?,
        };

        if !set.sdk_ordering_ok() {
            return Err(ResolveError::InvalidOrdering {
                minimum: set.minimum_sdk.level(),
                target: set.target_sdk.level(),
                compile: set.compile_sdk.level(),
            });
        }

        Ok(set)
    }
}

/// Resolve a raw configuration with the stock registries.
///
/// This is the entry point external callers use; construct a
/// [`ConfigResolver`] directly to supply custom registries.
pub fn resolve(config: &RawConfig) -> Result<ResolvedBuildPlan, ResolveError> {
    ConfigResolver::new().resolve(config)
}
