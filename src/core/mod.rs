//! Core data model for build-configuration resolution.
//!
//! These are the value types a raw configuration is made of and the
//! resolved plan is assembled from. Everything here is plain data:
//! no I/O, no registries, no resolution logic.

pub mod dependency;
pub mod plan;
pub mod plugin;
pub mod raw;
pub mod toolchain;
pub mod variant;

pub use dependency::{Coordinate, DependencyDeclaration, DependencyRole};
pub use plan::{AppMetadata, ResolvedBuildPlan};
pub use plugin::PluginDeclaration;
pub use raw::RawConfig;
pub use toolchain::{ToolchainSet, ToolchainVersion, VersionKind};
pub use variant::{AttrValue, BuildVariant};
