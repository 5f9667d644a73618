//! Accessor capability for objects that carry conditions
//!
//! Every supported resource kind implements [`Getter`] and [`Setter`] through
//! `impl_conditioned!`. The list is closed: passing any other type to the
//! setter functions is a compile error. Manifests of unknown shape go through
//! [`ConditionedObject::resolve`], which rejects unsupported kinds up front.

use super::registry;
use crate::error::{ConditionsError, ConditionsResult};
use crate::models::{Conditions, ConditionedResourceKind, Machine, MachineHealthCheck};
use kube::ResourceExt;
use serde_json::Value;

/// Read access to an object's conditions
pub trait Getter {
    /// Returns a copy of the object's current conditions
    fn conditions(&self) -> Conditions;
}

/// Write access to an object's conditions
pub trait Setter: Getter {
    /// Replaces the object's whole condition list
    fn set_conditions(&mut self, conditions: Conditions);
}

impl Getter for Conditions {
    fn conditions(&self) -> Conditions {
        self.clone()
    }
}

impl Setter for Conditions {
    fn set_conditions(&mut self, conditions: Conditions) {
        *self = conditions;
    }
}

macro_rules! impl_conditioned {
    ($type:ty) => {
        impl Getter for $type {
            fn conditions(&self) -> Conditions {
                self.status
                    .as_ref()
                    .map(|status| status.conditions.clone())
                    .unwrap_or_default()
            }
        }

        impl Setter for $type {
            fn set_conditions(&mut self, conditions: Conditions) {
                self.status.get_or_insert_with(Default::default).conditions = conditions;
            }
        }
    };
}

impl_conditioned!(Machine);
impl_conditioned!(MachineHealthCheck);

/// A resource of any supported kind
#[derive(Debug, Clone)]
pub enum ConditionedObject {
    Machine(Machine),
    MachineHealthCheck(MachineHealthCheck),
}

impl ConditionedObject {
    /// Resolve a dynamic manifest to a supported resource kind
    ///
    /// The manifest's `apiVersion` and `kind` must match an entry in the
    /// resource registry; anything else is an [`ConditionsError::UnsupportedKind`].
    pub fn resolve(manifest: Value) -> ConditionsResult<Self> {
        let api_version = manifest
            .get("apiVersion")
            .and_then(Value::as_str)
            .ok_or(ConditionsError::MissingTypeMeta("apiVersion"))?
            .to_string();
        let kind = manifest
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(ConditionsError::MissingTypeMeta("kind"))?
            .to_string();

        let Some(entry) = registry::lookup(&api_version, &kind) else {
            return Err(ConditionsError::UnsupportedKind { api_version, kind });
        };

        let object = match entry.kind {
            ConditionedResourceKind::Machine => serde_json::from_value(manifest)
                .map(ConditionedObject::Machine)
                .map_err(|source| ConditionsError::InvalidManifest {
                    kind: "Machine",
                    source,
                })?,
            ConditionedResourceKind::MachineHealthCheck => serde_json::from_value(manifest)
                .map(ConditionedObject::MachineHealthCheck)
                .map_err(|source| ConditionsError::InvalidManifest {
                    kind: "MachineHealthCheck",
                    source,
                })?,
        };

        tracing::debug!("Resolved {} {}", object.kind(), object.name());
        Ok(object)
    }

    pub fn kind(&self) -> ConditionedResourceKind {
        match self {
            ConditionedObject::Machine(_) => ConditionedResourceKind::Machine,
            ConditionedObject::MachineHealthCheck(_) => {
                ConditionedResourceKind::MachineHealthCheck
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            ConditionedObject::Machine(obj) => obj.name_any(),
            ConditionedObject::MachineHealthCheck(obj) => obj.name_any(),
        }
    }

    /// Render the object back to a manifest, including `apiVersion` and `kind`
    pub fn to_value(&self) -> ConditionsResult<Value> {
        let value = match self {
            ConditionedObject::Machine(obj) => serde_json::to_value(obj)?,
            ConditionedObject::MachineHealthCheck(obj) => serde_json::to_value(obj)?,
        };
        Ok(value)
    }
}

impl Getter for ConditionedObject {
    fn conditions(&self) -> Conditions {
        match self {
            ConditionedObject::Machine(obj) => obj.conditions(),
            ConditionedObject::MachineHealthCheck(obj) => obj.conditions(),
        }
    }
}

impl Setter for ConditionedObject {
    fn set_conditions(&mut self, conditions: Conditions) {
        match self {
            ConditionedObject::Machine(obj) => obj.set_conditions(conditions),
            ConditionedObject::MachineHealthCheck(obj) => obj.set_conditions(conditions),
        }
    }
}

impl From<Machine> for ConditionedObject {
    fn from(obj: Machine) -> Self {
        ConditionedObject::Machine(obj)
    }
}

impl From<MachineHealthCheck> for ConditionedObject {
    fn from(obj: MachineHealthCheck) -> Self {
        ConditionedObject::MachineHealthCheck(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, ConditionStatus, ConditionType, MachineSpec};
    use serde_json::json;

    #[test]
    fn test_machine_without_status_has_no_conditions() {
        let machine = Machine::new("worker-0", MachineSpec::default());
        assert!(machine.conditions().is_empty());
    }

    #[test]
    fn test_set_conditions_creates_status() {
        let mut machine = Machine::new("worker-0", MachineSpec::default());
        machine.set_conditions(vec![Condition {
            type_: ConditionType::READY,
            status: ConditionStatus::True,
            ..Default::default()
        }]);
        let status = machine.status.as_ref().unwrap();
        assert_eq!(status.conditions.len(), 1);
    }

    #[test]
    fn test_resolve_machine_manifest() {
        let manifest = json!({
            "apiVersion": "machine.openshift.io/v1beta1",
            "kind": "Machine",
            "metadata": {"name": "worker-0", "namespace": "openshift-machine-api"},
            "spec": {"providerID": "aws:///us-east-1a/i-0abc"},
            "status": {
                "phase": "Running",
                "conditions": [{"type": "Ready", "status": "True"}]
            }
        });
        let object = ConditionedObject::resolve(manifest).unwrap();
        assert_eq!(object.kind(), ConditionedResourceKind::Machine);
        assert_eq!(object.name(), "worker-0");
        assert_eq!(object.conditions().len(), 1);
    }

    #[test]
    fn test_resolve_rejects_unsupported_kind() {
        let manifest = json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "nginx"}
        });
        let err = ConditionedObject::resolve(manifest).unwrap_err();
        assert!(matches!(err, ConditionsError::UnsupportedKind { .. }));
    }

    #[test]
    fn test_resolve_requires_type_meta() {
        let err = ConditionedObject::resolve(json!({"kind": "Machine"})).unwrap_err();
        assert!(matches!(err, ConditionsError::MissingTypeMeta("apiVersion")));
    }
}
