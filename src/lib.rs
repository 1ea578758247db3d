//! Slipway - a build-configuration resolution engine.
//!
//! Slipway takes a declarative raw configuration - plugin applications,
//! toolchain version requests, variant overrides, and dependency
//! declarations - and resolves it into a single validated, immutable
//! build plan for a downstream compiler/packager to act on.

pub mod core;
pub mod resolver;
pub mod util;

pub use crate::core::{
    dependency::{Coordinate, DependencyDeclaration, DependencyRole},
    plan::ResolvedBuildPlan,
    plugin::PluginDeclaration,
    raw::RawConfig,
    toolchain::{ToolchainSet, ToolchainVersion, VersionKind},
    variant::BuildVariant,
};

pub use crate::resolver::{resolve, ConfigResolver, ResolveError};
