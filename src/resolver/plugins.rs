//! Plugin set resolution.
//!
//! Validates a declared plugin list against the configured allow-list,
//! rejects duplicates, and orders the set with a stable topological
//! sort over `after` hints. Stability (ties broken by input position)
//! makes resolution deterministic: unchanged input always produces an
//! identical application order.

use std::collections::{BTreeSet, HashSet};

use tracing::trace;

use crate::core::plugin::PluginDeclaration;
use crate::resolver::errors::ResolveError;

/// Allow-list of plugin identifiers the engine may apply.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    known: BTreeSet<String>,
}

impl PluginRegistry {
    /// Registry with the stock plugin set.
    pub fn with_defaults() -> Self {
        let known = [
            "application",
            "library",
            "language-toolchain",
            "cloud-services",
            "cross-platform-embed",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        PluginRegistry { known }
    }

    /// An empty registry; combine with [`allow`](Self::allow).
    pub fn empty() -> Self {
        PluginRegistry {
            known: BTreeSet::new(),
        }
    }

    /// Add an identifier to the allow-list.
    pub fn allow(mut self, id: impl Into<String>) -> Self {
        self.known.insert(id.into());
        self
    }

    /// Check whether an identifier is allow-listed.
    pub fn contains(&self, id: &str) -> bool {
        self.known.contains(id)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        PluginRegistry::with_defaults()
    }
}

/// Resolve a declared plugin set into its application order.
///
/// Rejects the first duplicate identifier, then any identifier (declared
/// or named in an `after` hint) missing from the allow-list or the
/// declared set, then applies ordering hints with a stable topological
/// sort. Cycles among hints are an error.
pub fn resolve_plugins(
    declared: &[PluginDeclaration],
    registry: &PluginRegistry,
) -> Result<Vec<PluginDeclaration>, ResolveError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for decl in declared {
        if !seen.insert(&decl.id) {
            return Err(ResolveError::DuplicatePlugin {
                id: decl.id.clone(),
            });
        }
        if !registry.contains(&decl.id) {
            return Err(ResolveError::UnknownPlugin {
                id: decl.id.clone(),
            });
        }
    }

    // Hints may only name plugins that are actually declared.
    for decl in declared {
        for dep in &decl.after {
            if !seen.contains(dep.as_str()) {
                return Err(ResolveError::UnknownPlugin { id: dep.clone() });
            }
        }
    }

    stable_topo_sort(declared)
}

/// Kahn's algorithm, always picking the ready node with the lowest
/// input index so ties preserve declaration order.
fn stable_topo_sort(declared: &[PluginDeclaration]) -> Result<Vec<PluginDeclaration>, ResolveError> {
    let n = declared.len();
    let index_of = |id: &str| declared.iter().position(|d| d.id == id);

    let mut indegree = vec![0usize; n];
    let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, decl) in declared.iter().enumerate() {
        for dep in &decl.after {
            // Presence was validated above.
            let j = index_of(dep).unwrap_or(i);
            if j == i {
                // A plugin hinted after itself can never be placed.
                return Err(ResolveError::PluginCycle {
                    ids: vec![decl.id.clone()],
                });
            }
            edges[j].push(i);
            indegree[i] += 1;
        }
    }

    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let next = (0..n).find(|&i| !placed[i] && indegree[i] == 0);
        let Some(i) = next else {
            let ids = (0..n)
                .filter(|&i| !placed[i])
                .map(|i| declared[i].id.clone())
                .collect();
            return Err(ResolveError::PluginCycle { ids });
        };
        placed[i] = true;
        trace!(plugin = %declared[i].id, position = order.len(), "placed plugin");
        order.push(declared[i].clone());
        for &k in &edges[i] {
            indegree[k] -= 1;
        }
    }

    Ok(order)
}
