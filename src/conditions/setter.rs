//! Condition upsert engine
//!
//! Setting a condition replaces any existing condition of the same type and
//! keeps the list sorted by type. The transition time only moves when the
//! condition's state (see [`has_same_state`]) actually changes.
//!
//! The read-modify-write inside [`ConditionSetter::set`] is not atomic;
//! callers serialize writes to the same object.

use super::accessor::Setter;
use super::clock::{truncate_to_second, Clock, SystemClock};
use super::compare::{has_same_state, lexicographic_cmp};
use super::factory::{false_condition, true_condition, unknown_condition};
use crate::models::{Condition, ConditionSeverity, ConditionType};
use chrono::{DateTime, Utc};
use std::fmt;

/// Sets conditions using the given clock for transition times
#[derive(Debug, Clone, Default)]
pub struct ConditionSetter<C = SystemClock> {
    clock: C,
}

impl<C: Clock> ConditionSetter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn now(&self) -> DateTime<Utc> {
        truncate_to_second(self.clock.now())
    }

    /// Sets the given condition.
    ///
    /// NOTE: If a condition already exists, the LastTransitionTime is updated only if a change is
    /// detected in any of the following fields: Status, Reason, Severity and Message. A new
    /// condition keeps a caller-supplied LastTransitionTime and is stamped with the current time
    /// otherwise.
    pub fn set<S: Setter + ?Sized>(&self, to: &mut S, mut condition: Condition) {
        let mut conditions = to.conditions();

        match conditions.iter_mut().find(|c| c.type_ == condition.type_) {
            Some(existing) => {
                if has_same_state(existing, &condition) {
                    tracing::trace!("Condition {} unchanged", condition.type_);
                    condition.last_transition_time = existing.last_transition_time;
                } else {
                    tracing::debug!(
                        "Condition {} transitioned: {} -> {} ({})",
                        condition.type_,
                        existing.status,
                        condition.status,
                        condition.reason
                    );
                    condition.last_transition_time = Some(self.now());
                }
                *existing = condition;
            }
            None => {
                if condition.last_transition_time.is_none() {
                    condition.last_transition_time = Some(self.now());
                }
                tracing::debug!(
                    "Condition {} added with status {}",
                    condition.type_,
                    condition.status
                );
                conditions.push(condition);
            }
        }

        // Sorted for the convenience of consumers such as kubectl
        conditions.sort_by(lexicographic_cmp);

        to.set_conditions(conditions);
    }

    /// Sets Status=True for the condition with the given type.
    pub fn mark_true<S: Setter + ?Sized>(&self, to: &mut S, t: impl Into<ConditionType>) {
        self.set(to, true_condition(t));
    }

    /// Sets Status=False for the condition with the given type.
    pub fn mark_false<S: Setter + ?Sized>(
        &self,
        to: &mut S,
        t: impl Into<ConditionType>,
        reason: impl Into<String>,
        severity: ConditionSeverity,
        message: impl fmt::Display,
    ) {
        self.set(to, false_condition(t, reason, severity, message));
    }

    /// Sets Status=Unknown for the condition with the given type.
    pub fn mark_unknown<S: Setter + ?Sized>(
        &self,
        to: &mut S,
        t: impl Into<ConditionType>,
        reason: impl Into<String>,
        message: impl fmt::Display,
    ) {
        self.set(to, unknown_condition(t, reason, message));
    }
}

/// Sets the given condition, stamping transitions with wall-clock time.
pub fn set<S: Setter + ?Sized>(to: &mut S, condition: Condition) {
    ConditionSetter::<SystemClock>::default().set(to, condition);
}

/// Like [`set`], but does nothing when either the target or the condition is absent.
pub fn set_if_present<S: Setter + ?Sized>(to: Option<&mut S>, condition: Option<Condition>) {
    if let (Some(to), Some(condition)) = (to, condition) {
        set(to, condition);
    }
}

/// Sets Status=True for the condition with the given type.
pub fn mark_true<S: Setter + ?Sized>(to: &mut S, t: impl Into<ConditionType>) {
    ConditionSetter::<SystemClock>::default().mark_true(to, t);
}

/// Sets Status=False for the condition with the given type.
pub fn mark_false<S: Setter + ?Sized>(
    to: &mut S,
    t: impl Into<ConditionType>,
    reason: impl Into<String>,
    severity: ConditionSeverity,
    message: impl fmt::Display,
) {
    ConditionSetter::<SystemClock>::default().mark_false(to, t, reason, severity, message);
}

/// Sets Status=Unknown for the condition with the given type.
pub fn mark_unknown<S: Setter + ?Sized>(
    to: &mut S,
    t: impl Into<ConditionType>,
    reason: impl Into<String>,
    message: impl fmt::Display,
) {
    ConditionSetter::<SystemClock>::default().mark_unknown(to, t, reason, message);
}
