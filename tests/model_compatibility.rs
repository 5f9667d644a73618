//! Model compatibility tests
//!
//! The registry metadata must agree with what the resource models declare,
//! and manifests must survive a resolve/render round trip.

use kube::Resource;
use machine_conditions::conditions::registry::entry_for;
use machine_conditions::models::{Machine, MachineHealthCheck};
use machine_conditions::{ConditionedObject, ConditionedResourceKind, ConditionsError, Getter};
use serde_json::json;

#[test]
fn test_registry_matches_machine_model() {
    let entry = entry_for(ConditionedResourceKind::Machine).unwrap();
    assert_eq!(Machine::group(&()), entry.api_group);
    assert_eq!(Machine::version(&()), entry.api_version);
    assert_eq!(Machine::plural(&()), entry.plural);
    assert_eq!(Machine::kind(&()), entry.kind.as_str());
    assert_eq!(Machine::api_version(&()), entry.group_version());
}

#[test]
fn test_registry_matches_machine_health_check_model() {
    let entry = entry_for(ConditionedResourceKind::MachineHealthCheck).unwrap();
    assert_eq!(MachineHealthCheck::group(&()), entry.api_group);
    assert_eq!(MachineHealthCheck::version(&()), entry.api_version);
    assert_eq!(MachineHealthCheck::plural(&()), entry.plural);
    assert_eq!(MachineHealthCheck::kind(&()), entry.kind.as_str());
}

#[test]
fn test_machine_health_check_manifest() {
    let manifest = json!({
        "apiVersion": "machine.openshift.io/v1beta1",
        "kind": "MachineHealthCheck",
        "metadata": {"name": "workers", "namespace": "openshift-machine-api"},
        "spec": {
            "maxUnhealthy": "40%",
            "selector": {"matchLabels": {"machine.openshift.io/cluster-api-machine-role": "worker"}}
        },
        "status": {
            "expectedMachines": 3,
            "currentHealthy": 3,
            "remediationsAllowed": 1,
            "conditions": [
                {"type": "RemediationAllowed", "status": "True"}
            ]
        }
    });

    let object = ConditionedObject::resolve(manifest).unwrap();
    assert_eq!(object.kind(), ConditionedResourceKind::MachineHealthCheck);
    assert_eq!(object.conditions().len(), 1);

    let rendered = object.to_value().unwrap();
    assert_eq!(rendered["spec"]["maxUnhealthy"], "40%");
    assert_eq!(rendered["status"]["remediationsAllowed"], 1);
    assert_eq!(
        rendered["spec"]["selector"]["matchLabels"]["machine.openshift.io/cluster-api-machine-role"],
        "worker"
    );
}

#[test]
fn test_unsupported_kinds_are_rejected() {
    let manifests = vec![
        json!({"apiVersion": "machine.openshift.io/v1beta1", "kind": "MachineSet", "metadata": {"name": "ms"}}),
        json!({"apiVersion": "cluster.x-k8s.io/v1beta1", "kind": "Machine", "metadata": {"name": "capi"}}),
    ];

    for manifest in manifests {
        match ConditionedObject::resolve(manifest) {
            Err(ConditionsError::UnsupportedKind { kind, .. }) => {
                assert!(kind == "MachineSet" || kind == "Machine")
            }
            other => panic!("expected UnsupportedKind, got {:?}", other),
        }
    }
}

#[test]
fn test_invalid_manifest_is_reported() {
    let manifest = json!({
        "apiVersion": "machine.openshift.io/v1beta1",
        "kind": "Machine",
        "metadata": {"name": "broken"},
        "spec": {},
        "status": {"conditions": [{"type": "Ready", "status": "Maybe"}]}
    });

    let err = ConditionedObject::resolve(manifest).unwrap_err();
    assert!(matches!(err, ConditionsError::InvalidManifest { kind: "Machine", .. }));
}
