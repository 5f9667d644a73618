//! Machine conditions library
//!
//! Maintains the status conditions of Machine API resources: an ordered,
//! type-unique list of timestamped status records whose transition time
//! only moves on real state changes. The `mconditions` binary is a thin CLI
//! over this library.

pub mod conditions;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use conditions::{
    false_condition, has_same_state, lexicographic_less, mark_false, mark_true, mark_unknown,
    match_condition, match_conditions, set, set_if_present, true_condition, unknown_condition,
    ConditionSetter, ConditionedObject, Getter, Setter,
};
pub use error::{ConditionsError, ConditionsResult};
pub use models::{
    Condition, ConditionSeverity, ConditionStatus, ConditionType, ConditionedResourceKind,
    Conditions,
};
