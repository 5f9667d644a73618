//! Semantic equality and canonical ordering of conditions

use crate::models::Condition;
use std::cmp::Ordering;

/// Returns true if two conditions have the same state.
///
/// State is the union of Type, Status, Reason, Severity and Message;
/// LastTransitionTime is not part of it.
pub fn has_same_state(i: &Condition, j: &Condition) -> bool {
    i.type_ == j.type_
        && i.status == j.status
        && i.reason == j.reason
        && i.severity == j.severity
        && i.message == j.message
}

/// Canonical order of conditions, by type
pub fn lexicographic_cmp(i: &Condition, j: &Condition) -> Ordering {
    i.type_.cmp(&j.type_)
}

/// Returns true if `i` sorts before `j` in the order presented to consumers (e.g. kubectl)
pub fn lexicographic_less(i: &Condition, j: &Condition) -> bool {
    lexicographic_cmp(i, j).is_lt()
}
