//! Constructors for conditions in the three canonical states
//!
//! None of these set `last_transition_time`; only the setter stamps it.
//! Messages accept anything displayable, so callers format them with
//! `format_args!("machine {} has no instance", name)`.

use crate::models::{Condition, ConditionSeverity, ConditionStatus, ConditionType};
use std::fmt;

/// Returns a condition with Status=True and the given type.
pub fn true_condition(t: impl Into<ConditionType>) -> Condition {
    Condition {
        type_: t.into(),
        status: ConditionStatus::True,
        ..Default::default()
    }
}

/// Returns a condition with Status=False and the given type.
pub fn false_condition(
    t: impl Into<ConditionType>,
    reason: impl Into<String>,
    severity: ConditionSeverity,
    message: impl fmt::Display,
) -> Condition {
    Condition {
        type_: t.into(),
        status: ConditionStatus::False,
        reason: reason.into(),
        severity,
        message: message.to_string(),
        last_transition_time: None,
    }
}

/// Returns a condition with Status=Unknown and the given type.
pub fn unknown_condition(
    t: impl Into<ConditionType>,
    reason: impl Into<String>,
    message: impl fmt::Display,
) -> Condition {
    Condition {
        type_: t.into(),
        status: ConditionStatus::Unknown,
        reason: reason.into(),
        message: message.to_string(),
        ..Default::default()
    }
}
