//! Matchers for asserting on condition state
//!
//! Both matchers compare state only and ignore LastTransitionTime. The list
//! matcher is order-sensitive: lists with the same conditions in a different
//! order do not match.

use super::compare::has_same_state;
use crate::models::{Condition, Conditions};
use serde::Serialize;

/// Returns a matcher that checks a condition has the same state as `expected`
pub fn match_condition(expected: Condition) -> ConditionMatcher {
    ConditionMatcher { expected }
}

/// Returns a matcher that checks a condition list matches `expected` element by element
pub fn match_conditions(expected: Conditions) -> ConditionsMatcher {
    ConditionsMatcher { expected }
}

#[derive(Debug, Clone)]
pub struct ConditionMatcher {
    expected: Condition,
}

impl ConditionMatcher {
    pub fn matches(&self, actual: &Condition) -> bool {
        has_same_state(actual, &self.expected)
    }

    pub fn failure_message(&self, actual: &Condition) -> String {
        format_message(actual, "to match", &self.expected)
    }

    pub fn negated_failure_message(&self, actual: &Condition) -> String {
        format_message(actual, "not to match", &self.expected)
    }
}

#[derive(Debug, Clone)]
pub struct ConditionsMatcher {
    expected: Conditions,
}

impl ConditionsMatcher {
    pub fn matches(&self, actual: &[Condition]) -> bool {
        actual.len() == self.expected.len()
            && actual
                .iter()
                .zip(&self.expected)
                .all(|(a, e)| has_same_state(a, e))
    }

    pub fn failure_message(&self, actual: &[Condition]) -> String {
        format_message(actual, "to match", &self.expected)
    }

    pub fn negated_failure_message(&self, actual: &[Condition]) -> String {
        format_message(actual, "not to match", &self.expected)
    }
}

fn format_message<A: Serialize + ?Sized, E: Serialize + ?Sized>(
    actual: &A,
    verb: &str,
    expected: &E,
) -> String {
    format!(
        "Expected\n{}\n{}\n{}",
        indent(actual),
        verb,
        indent(expected)
    )
}

fn indent<T: Serialize + ?Sized>(value: &T) -> String {
    let rendered = serde_yaml::to_string(value)
        .unwrap_or_else(|e| format!("<unrenderable: {}>", e));
    rendered
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
