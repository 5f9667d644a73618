//! Condition value types
//!
//! A condition is a typed, timestamped status record attached to a resource.
//! Resources keep an ordered list of them, at most one per condition type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Discriminator identifying which aspect of a resource a condition describes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionType(Cow<'static, str>);

impl ConditionType {
    /// Ready summarizes the overall operational state of a resource
    pub const READY: ConditionType = ConditionType::from_static("Ready");
    /// The machine can be drained
    pub const DRAINABLE: ConditionType = ConditionType::from_static("Drainable");
    /// The machine can be terminated
    pub const TERMINABLE: ConditionType = ConditionType::from_static("Terminable");
    /// The backing cloud instance exists
    pub const INSTANCE_EXISTS: ConditionType = ConditionType::from_static("InstanceExists");
    /// A MachineHealthCheck is allowed to remediate unhealthy machines
    pub const REMEDIATION_ALLOWED: ConditionType =
        ConditionType::from_static("RemediationAllowed");

    pub const fn from_static(s: &'static str) -> Self {
        ConditionType(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ConditionType {
    fn from(s: &str) -> Self {
        ConditionType(Cow::Owned(s.to_string()))
    }
}

impl From<String> for ConditionType {
    fn from(s: String) -> Self {
        ConditionType(Cow::Owned(s))
    }
}

/// Status of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seriousness of a condition with `Status=False`
///
/// Orthogonal to the status itself; `None` is used for every other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConditionSeverity {
    #[default]
    #[serde(rename = "")]
    None,
    Error,
    Warning,
    Info,
}

impl ConditionSeverity {
    pub fn is_none(&self) -> bool {
        matches!(self, ConditionSeverity::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionSeverity::None => "",
            ConditionSeverity::Error => "Error",
            ConditionSeverity::Warning => "Warning",
            ConditionSeverity::Info => "Info",
        }
    }

    /// Parse a severity name (case-insensitive); the empty string and "none" map to `None`
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "" | "none" => Some(ConditionSeverity::None),
            "error" => Some(ConditionSeverity::Error),
            "warning" => Some(ConditionSeverity::Warning),
            "info" => Some(ConditionSeverity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for ConditionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single status record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: ConditionType,

    pub status: ConditionStatus,

    #[serde(default, skip_serializing_if = "ConditionSeverity::is_none")]
    pub severity: ConditionSeverity,

    /// Last time the condition's state changed; `None` until the setter stamps it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Per-object condition list, unique by type and sorted by type after every set
pub type Conditions = Vec<Condition>;
