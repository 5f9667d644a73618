//! Condition management
//!
//! Records and compares conditions decided by the caller: the upsert engine
//! (`setter`), semantic equality and ordering (`compare`), constructors
//! (`factory`), read helpers (`getter`), matchers for verification
//! (`matcher`) and the accessor capability that bridges concrete resource
//! kinds (`accessor`, `registry`).

pub mod accessor;
pub mod clock;
pub mod compare;
pub mod factory;
pub mod getter;
pub mod matcher;
pub mod registry;
pub mod setter;

pub use accessor::{ConditionedObject, Getter, Setter};
pub use clock::{Clock, SystemClock};
pub use compare::{has_same_state, lexicographic_less};
pub use factory::{false_condition, true_condition, unknown_condition};
pub use getter::{get, has, is_false, is_true, is_unknown};
pub use matcher::{match_condition, match_conditions, ConditionMatcher, ConditionsMatcher};
pub use registry::RESOURCE_REGISTRY;
pub use setter::{mark_false, mark_true, mark_unknown, set, set_if_present, ConditionSetter};
