//! Dependency declaration set.
//!
//! Declarations are collected with `add`, which rejects a duplicate
//! coordinate within one role immediately. Cross-role policy checks are
//! deferred to `finalize` so declarations may arrive in any order.

use std::collections::BTreeMap;

use crate::core::dependency::{Coordinate, DependencyDeclaration, DependencyRole};
use crate::resolver::errors::ResolveError;

/// Accumulates dependency declarations for validation.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    declared: BTreeMap<(Coordinate, DependencyRole), DependencyDeclaration>,
}

impl DependencySet {
    /// Create an empty set.
    pub fn new() -> Self {
        DependencySet::default()
    }

    /// Add a declaration.
    ///
    /// Fails when the same group/artifact pair is already declared in
    /// the same role, whatever the versions involved.
    pub fn add(&mut self, decl: DependencyDeclaration) -> Result<(), ResolveError> {
        let key = (decl.coordinate.clone(), decl.role);
        if self.declared.contains_key(&key) {
            return Err(ResolveError::DuplicateDependency {
                coordinate: decl.coordinate,
                role: decl.role,
            });
        }
        self.declared.insert(key, decl);
        Ok(())
    }

    /// Validate cross-role policy and produce the final declaration list.
    ///
    /// A coordinate declared as a compile augmentation may not also be
    /// runtime-linked: the augmentation would be counted into the build
    /// twice. Output is sorted by coordinate, then role, so the plan is
    /// deterministic.
    pub fn finalize(self) -> Result<Vec<DependencyDeclaration>, ResolveError> {
        for (coordinate, role) in self.declared.keys() {
            if *role == DependencyRole::CompileAugmentation {
                let other = (coordinate.clone(), DependencyRole::RuntimeLinked);
                if self.declared.contains_key(&other) {
                    return Err(ResolveError::RoleConflict {
                        coordinate: coordinate.clone(),
                    });
                }
            }
        }
        Ok(self.declared.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use semver::Version;

    use super::*;

    fn decl(coordinate: &str, role: DependencyRole, version: &str) -> DependencyDeclaration {
        DependencyDeclaration::new(coordinate.parse().unwrap(), role, version.parse().unwrap())
    }

    #[test]
    fn test_duplicate_same_role_rejected() {
        let mut set = DependencySet::new();
        set.add(decl("desugar-lib", DependencyRole::CompileAugmentation, "2.1.4"))
            .unwrap();
        let err = set
            .add(decl("desugar-lib", DependencyRole::CompileAugmentation, "2.1.5"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::DuplicateDependency {
                coordinate: "desugar-lib".parse().unwrap(),
                role: DependencyRole::CompileAugmentation,
            }
        );
    }

    #[test]
    fn test_role_conflict_deferred_to_finalize() {
        let mut set = DependencySet::new();
        set.add(decl("desugar-lib", DependencyRole::RuntimeLinked, "2.1.4"))
            .unwrap();
        // Declaration order does not matter; add succeeds either way.
        set.add(decl("desugar-lib", DependencyRole::CompileAugmentation, "2.1.4"))
            .unwrap();

        let err = set.finalize().unwrap_err();
        assert_eq!(
            err,
            ResolveError::RoleConflict {
                coordinate: "desugar-lib".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_distinct_coordinates_coexist() {
        let mut set = DependencySet::new();
        set.add(decl(
            "com.android.tools:desugar_jdk_libs",
            DependencyRole::CompileAugmentation,
            "2.1.4",
        ))
        .unwrap();
        set.add(decl(
            "androidx.multidex:multidex",
            DependencyRole::RuntimeLinked,
            "2.0.1",
        ))
        .unwrap();

        let finalized = set.finalize().unwrap();
        assert_eq!(finalized.len(), 2);
        // Sorted by coordinate.
        assert_eq!(finalized[0].coordinate.group(), "androidx.multidex");
        assert_eq!(finalized[1].min_version, Version::new(2, 1, 4));
    }

    #[test]
    fn test_finalize_output_sorted_and_deterministic() {
        let mut a = DependencySet::new();
        let mut b = DependencySet::new();
        let d1 = decl("b-group:lib", DependencyRole::RuntimeLinked, "1.0.0");
        let d2 = decl("a-group:lib", DependencyRole::RuntimeLinked, "1.0.0");
        a.add(d1.clone()).unwrap();
        a.add(d2.clone()).unwrap();
        b.add(d2).unwrap();
        b.add(d1).unwrap();
        assert_eq!(a.finalize().unwrap(), b.finalize().unwrap());
    }
}
