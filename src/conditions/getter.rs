//! Read helpers over an object's conditions

use super::accessor::Getter;
use crate::models::{Condition, ConditionSeverity, ConditionStatus, ConditionType};
use chrono::{DateTime, Utc};

/// Returns the condition with the given type, if present.
pub fn get<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> Option<Condition> {
    from.conditions().into_iter().find(|c| &c.type_ == t)
}

/// Returns true if a condition with the given type exists.
pub fn has<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> bool {
    get(from, t).is_some()
}

fn status<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> Option<ConditionStatus> {
    get(from, t).map(|c| c.status)
}

/// Returns true if the condition with the given type is True.
pub fn is_true<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> bool {
    status(from, t) == Some(ConditionStatus::True)
}

/// Returns true if the condition with the given type is False.
pub fn is_false<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> bool {
    status(from, t) == Some(ConditionStatus::False)
}

/// Returns true if the condition with the given type is Unknown or missing.
pub fn is_unknown<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> bool {
    matches!(status(from, t), None | Some(ConditionStatus::Unknown))
}

/// Returns the reason of the condition with the given type, empty if missing.
pub fn get_reason<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> String {
    get(from, t).map(|c| c.reason).unwrap_or_default()
}

/// Returns the message of the condition with the given type, empty if missing.
pub fn get_message<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> String {
    get(from, t).map(|c| c.message).unwrap_or_default()
}

/// Returns the severity of the condition with the given type, if present.
pub fn get_severity<G: Getter + ?Sized>(from: &G, t: &ConditionType) -> Option<ConditionSeverity> {
    get(from, t).map(|c| c.severity)
}

/// Returns when the condition with the given type last changed state, if
/// present and stamped.
pub fn get_last_transition_time<G: Getter + ?Sized>(
    from: &G,
    t: &ConditionType,
) -> Option<DateTime<Utc>> {
    get(from, t).and_then(|c| c.last_transition_time)
}
