//! Reading and writing manifest documents
//!
//! Documents are YAML or JSON files, or stdin when the path is `-`.

use anyhow::{Context, Result};
use machine_conditions::config::OutputFormat;
use machine_conditions::{ConditionedObject, Conditions, ConditionsError, Getter};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a YAML or JSON document into a JSON value
pub fn read_document(path: &Path) -> Result<Value> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    // YAML is a superset of JSON, so one parser covers both
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const UNQUOTED_BOOLEAN_HINT: &str =
    "YAML reads unquoted True/False as booleans; quote condition statuses, e.g. status: \"True\"";

/// Whether a decode error comes from a YAML boolean where a string was expected
fn is_unquoted_boolean(err: &serde_json::Error) -> bool {
    err.to_string().contains("invalid type: boolean")
}

fn resolve(manifest: Value, path: &Path) -> Result<ConditionedObject> {
    let resolved = ConditionedObject::resolve(manifest);
    let hint = matches!(
        &resolved,
        Err(ConditionsError::InvalidManifest { source, .. }) if is_unquoted_boolean(source)
    );

    resolved.with_context(|| {
        if hint {
            format!("Failed to resolve {} ({})", path.display(), UNQUOTED_BOOLEAN_HINT)
        } else {
            format!("Failed to resolve {}", path.display())
        }
    })
}

/// Read a manifest and resolve it to a supported resource kind
pub fn read_object(path: &Path) -> Result<ConditionedObject> {
    resolve(read_document(path)?, path)
}

/// Read conditions from either a manifest or a bare list of conditions
pub fn read_conditions(path: &Path) -> Result<Conditions> {
    match read_document(path)? {
        Value::Array(items) => serde_json::from_value(Value::Array(items)).map_err(|e| {
            let context = if is_unquoted_boolean(&e) {
                format!(
                    "Failed to parse conditions in {} ({})",
                    path.display(),
                    UNQUOTED_BOOLEAN_HINT
                )
            } else {
                format!("Failed to parse conditions in {}", path.display())
            };
            anyhow::Error::new(e).context(context)
        }),
        manifest => Ok(resolve(manifest, path)?.conditions()),
    }
}

/// Format implied by a file name, for writing a file back in place
pub fn format_for_path(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    }
}

/// Render a value in the given format
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .context("Failed to render JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNQUOTED_STATUS: &str = r#"apiVersion: machine.openshift.io/v1beta1
kind: Machine
metadata:
  name: worker-0
status:
  conditions:
  - type: Ready
    status: True
"#;

    #[test]
    fn test_unquoted_status_error_has_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machine.yaml");
        std::fs::write(&path, UNQUOTED_STATUS).unwrap();

        let err = read_object(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("quote condition statuses"), "{}", message);
        assert!(message.contains("invalid type: boolean"), "{}", message);
    }

    #[test]
    fn test_unquoted_status_in_bare_list_has_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conditions.yaml");
        std::fs::write(&path, "- type: Ready\n  status: True\n").unwrap();

        let err = read_conditions(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("quote condition statuses"));
    }

    #[test]
    fn test_other_resolve_errors_have_no_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pod.yaml");
        std::fs::write(&path, "apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\n").unwrap();

        let message = format!("{:#}", read_object(&path).unwrap_err());
        assert!(message.starts_with("Failed to resolve"));
        assert!(!message.contains("quote condition statuses"));
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("m.json")), OutputFormat::Json);
        assert_eq!(format_for_path(Path::new("m.yaml")), OutputFormat::Yaml);
        assert_eq!(format_for_path(Path::new("-")), OutputFormat::Yaml);
    }
}
