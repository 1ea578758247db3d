//! Resolution error types and diagnostics.
//!
//! Every error is terminal for the resolution attempt and carries the
//! offending identifier, coordinate, or name. The first failure in the
//! pipeline is returned verbatim; nothing is retried or downgraded.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::dependency::{Coordinate, DependencyRole};
use crate::core::toolchain::VersionKind;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error during build-configuration resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ResolveError {
    #[error("unsupported {kind} version `{requested}`")]
    #[diagnostic(
        code(slipway::versions::unsupported),
        help("supported {kind} versions are {min} through {max}")
    )]
    UnsupportedVersion {
        kind: VersionKind,
        requested: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid SDK ordering: minimum-sdk {minimum}, target-sdk {target}, compile-sdk {compile}")]
    #[diagnostic(
        code(slipway::versions::invalid_ordering),
        help("keep minimum-sdk <= target-sdk <= compile-sdk")
    )]
    InvalidOrdering {
        minimum: u32,
        target: u32,
        compile: u32,
    },

    #[error("duplicate plugin `{id}`")]
    #[diagnostic(code(slipway::plugins::duplicate))]
    DuplicatePlugin { id: String },

    #[error("unknown plugin `{id}`")]
    #[diagnostic(code(slipway::plugins::unknown))]
    UnknownPlugin { id: String },

    #[error("plugin ordering cycle")]
    #[diagnostic(
        code(slipway::plugins::cycle),
        help("remove one of the `after` hints to break the cycle")
    )]
    PluginCycle { ids: Vec<String> },

    #[error("unknown variant `{name}`")]
    #[diagnostic(code(slipway::variants::unknown))]
    UnknownVariant { name: String, known: Vec<String> },

    #[error("duplicate dependency `{coordinate}` in role {role}")]
    #[diagnostic(code(slipway::dependencies::duplicate))]
    DuplicateDependency {
        coordinate: Coordinate,
        role: DependencyRole,
    },

    #[error("conflicting roles for dependency `{coordinate}`")]
    #[diagnostic(
        code(slipway::dependencies::role_conflict),
        help("a compile augmentation cannot also be runtime-linked; pick one role")
    )]
    RoleConflict { coordinate: Coordinate },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::UnsupportedVersion {
                kind,
                requested,
                min,
                max,
            } => Diagnostic::error(format!("unsupported {} version `{}`", kind, requested))
                .with_context(format!("supported {} range: {} through {}", kind, min, max))
                .with_suggestion(suggestions::CHECK_VERSION_REGISTRY),

            ResolveError::InvalidOrdering {
                minimum,
                target,
                compile,
            } => Diagnostic::error("SDK levels are mis-ordered")
                .with_context(format!(
                    "minimum-sdk {} / target-sdk {} / compile-sdk {}",
                    minimum, target, compile
                ))
                .with_suggestion(suggestions::FIX_SDK_ORDERING),

            ResolveError::DuplicatePlugin { id } => {
                Diagnostic::error(format!("plugin `{}` is declared more than once", id))
                    .with_suggestion(suggestions::REMOVE_DUPLICATE_PLUGIN)
            }

            ResolveError::UnknownPlugin { id } => {
                Diagnostic::error(format!("plugin `{}` is not a known plugin", id))
                    .with_suggestion("Check the plugin identifier against the configured allow-list")
            }

            ResolveError::PluginCycle { ids } => {
                Diagnostic::error("plugin ordering hints form a cycle")
                    .with_context(format!("cycle involves: {}", ids.join(" -> ")))
                    .with_suggestion("Remove or reverse one `after` hint to break the cycle")
            }

            ResolveError::UnknownVariant { name, known } => {
                let mut diag = Diagnostic::error(format!("no variant named `{}`", name));
                if !known.is_empty() {
                    diag = diag.with_context(format!("declared variants: {}", known.join(", ")));
                }
                diag.with_suggestion("Declare the variant or request one of the declared names")
            }

            ResolveError::DuplicateDependency { coordinate, role } => Diagnostic::error(format!(
                "dependency `{}` is declared twice as {}",
                coordinate, role
            ))
            .with_suggestion(suggestions::REMOVE_DUPLICATE_DEPENDENCY),

            ResolveError::RoleConflict { coordinate } => Diagnostic::error(format!(
                "dependency `{}` is declared with conflicting roles",
                coordinate
            ))
            .with_context("declared both as compile-augmentation and runtime-linked")
            .with_suggestion("Pick a single role for the coordinate"),
        }
    }
}
