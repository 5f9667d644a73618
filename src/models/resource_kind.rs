//! Conditioned resource kind definitions
//!
//! This module provides a centralized enum for the resource kinds that can
//! carry conditions. The set is closed: adding a kind means adding a variant
//! here, a model in `resources.rs`, an accessor impl and a registry entry.

use std::fmt;
use std::str::FromStr;

/// Enumeration of all resource kinds that carry conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionedResourceKind {
    Machine,
    MachineHealthCheck,
}

impl ConditionedResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionedResourceKind::Machine => "Machine",
            ConditionedResourceKind::MachineHealthCheck => "MachineHealthCheck",
        }
    }

    /// Get all supported kinds
    pub fn all() -> &'static [Self] {
        &[
            ConditionedResourceKind::Machine,
            ConditionedResourceKind::MachineHealthCheck,
        ]
    }

    /// Try to parse a kind name or command alias (case-insensitive)
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        crate::conditions::registry::get_kind_for_alias(s)
    }
}

impl fmt::Display for ConditionedResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConditionedResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Machine" => Ok(ConditionedResourceKind::Machine),
            "MachineHealthCheck" => Ok(ConditionedResourceKind::MachineHealthCheck),
            _ => Err(format!("Unknown conditioned resource kind: {}", s)),
        }
    }
}
