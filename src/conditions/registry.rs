//! Resource registry for conditioned resource kinds
//!
//! The closed mapping from a manifest's `apiVersion`/`kind` (or a command
//! alias) to a supported kind. To add a new kind:
//! 1. Add a variant to `ConditionedResourceKind` and a model in `models/resources.rs`
//! 2. Add `impl_conditioned!` for it in `accessor.rs` and a `ConditionedObject` variant
//! 3. Add an entry here

use crate::models::ConditionedResourceKind;

/// Registry entry for a conditioned resource type
#[derive(Debug)]
pub struct ResourceEntry {
    pub kind: ConditionedResourceKind,
    pub api_group: &'static str,
    pub api_version: &'static str,
    pub plural: &'static str,
    pub command_aliases: &'static [&'static str],
}

impl ResourceEntry {
    /// `group/version` as written in a manifest's `apiVersion`
    pub fn group_version(&self) -> String {
        format!("{}/{}", self.api_group, self.api_version)
    }
}

/// Registry of all conditioned resources
pub const RESOURCE_REGISTRY: &[ResourceEntry] = &[
    ResourceEntry {
        kind: ConditionedResourceKind::Machine,
        api_group: "machine.openshift.io",
        api_version: "v1beta1",
        plural: "machines",
        command_aliases: &["machine", "machines", "ma"],
    },
    ResourceEntry {
        kind: ConditionedResourceKind::MachineHealthCheck,
        api_group: "machine.openshift.io",
        api_version: "v1beta1",
        plural: "machinehealthchecks",
        command_aliases: &["machinehealthcheck", "machinehealthchecks", "mhc"],
    },
];

/// Find the entry for a manifest's `apiVersion` and `kind`
pub fn lookup(api_version: &str, kind: &str) -> Option<&'static ResourceEntry> {
    RESOURCE_REGISTRY
        .iter()
        .find(|entry| entry.kind.as_str() == kind && entry.group_version() == api_version)
}

/// Get the entry for a kind
pub fn entry_for(kind: ConditionedResourceKind) -> Option<&'static ResourceEntry> {
    RESOURCE_REGISTRY.iter().find(|entry| entry.kind == kind)
}

/// Get the kind for a command alias or kind name
pub fn get_kind_for_alias(alias: &str) -> Option<ConditionedResourceKind> {
    let alias_lower = alias.to_lowercase();
    RESOURCE_REGISTRY
        .iter()
        .find(|entry| {
            entry.kind.as_str().to_lowercase() == alias_lower
                || entry.command_aliases.iter().any(|&a| a == alias_lower)
        })
        .map(|entry| entry.kind)
}
