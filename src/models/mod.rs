//! Model layer
//!
//! Structure:
//! - `condition.rs` - Condition value types
//! - `resources.rs` - Resource kinds that carry conditions
//! - `resource_kind.rs` - Closed enum of those kinds

pub mod condition;
pub mod resource_kind;
pub mod resources;

pub use condition::{Condition, ConditionSeverity, ConditionStatus, ConditionType, Conditions};
pub use resource_kind::ConditionedResourceKind;
pub use resources::{
    Machine, MachineHealthCheck, MachineHealthCheckSpec, MachineHealthCheckStatus, MachineSpec,
    MachineStatus,
};
