//! CLI command handlers

use super::document::{format_for_path, read_conditions, read_object, render};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use machine_conditions::conditions::{getter, registry};
use machine_conditions::config::{paths, Config, ConfigLoader, OutputFormat};
use machine_conditions::{
    false_condition, match_condition, match_conditions, true_condition, unknown_condition,
    Condition, ConditionSeverity, ConditionType, ConditionedObject, ConditionedResourceKind,
    Getter,
};
use std::path::{Path, PathBuf};

/// Condition status accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StatusArg {
    True,
    False,
    Unknown,
}

/// Arguments of the `set` command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Manifest file (YAML or JSON), or '-' for stdin
    pub file: PathBuf,

    /// Condition type (e.g., "Ready", "Drainable")
    #[arg(long = "type", short = 't')]
    pub condition_type: String,

    /// Condition status
    #[arg(long, short = 's', value_enum)]
    pub status: StatusArg,

    /// Machine-readable reason
    #[arg(long, short = 'r')]
    pub reason: Option<String>,

    /// Severity for Status=False (Error, Warning, Info); defaults to defaultSeverity
    #[arg(long)]
    pub severity: Option<String>,

    /// Human-readable message
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Rewrite the file instead of printing the result
    #[arg(long, short = 'i')]
    pub in_place: bool,

    /// Refuse manifests of any other kind (kind name or alias, e.g. "mhc")
    #[arg(long, short = 'k')]
    pub kind: Option<String>,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "output", "logger.level")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "output", "logger.level")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Print the conditions of a manifest, or a single condition by type
pub fn handle_get(
    file: &Path,
    condition_type: Option<&str>,
    kind: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let object = read_object(file)?;
    check_kind(&object, kind)?;

    match condition_type {
        Some(t) => {
            let t = ConditionType::from(t);
            let condition = getter::get(&object, &t).ok_or_else(|| {
                anyhow::anyhow!("{} {} has no {} condition", object.kind(), object.name(), t)
            })?;
            print!("{}", render(&condition, output)?);
        }
        None => print!("{}", render(&object.conditions(), output)?),
    }

    Ok(())
}

/// Set a condition on a manifest and print or rewrite it
pub fn handle_set(args: SetArgs, config: &Config, output: OutputFormat) -> Result<()> {
    if args.in_place && args.file == Path::new("-") {
        return Err(anyhow::anyhow!("--in-place cannot be used with stdin"));
    }

    let mut object = read_object(&args.file)?;
    check_kind(&object, args.kind.as_deref())?;
    let condition = build_condition(&args, config)?;
    tracing::debug!(
        "Setting {}={} on {} {}",
        condition.type_,
        condition.status,
        object.kind(),
        object.name()
    );

    machine_conditions::set(&mut object, condition);

    let manifest = object
        .to_value()
        .context("Failed to render updated manifest")?;
    if args.in_place {
        let rendered = render(&manifest, format_for_path(&args.file))?;
        std::fs::write(&args.file, rendered)
            .with_context(|| format!("Failed to write {}", args.file.display()))?;
        eprintln!("Updated {}", args.file.display());
    } else {
        print!("{}", render(&manifest, output)?);
    }

    Ok(())
}

/// Reject a manifest whose kind differs from the one requested with `--kind`
fn check_kind(object: &ConditionedObject, expected: Option<&str>) -> Result<()> {
    let Some(alias) = expected else {
        return Ok(());
    };
    let kind = ConditionedResourceKind::from_str_case_insensitive(alias)
        .ok_or_else(|| anyhow::anyhow!("Unknown kind: {} (see `mconditions kinds`)", alias))?;

    if object.kind() != kind {
        return Err(anyhow::anyhow!(
            "{} is a {}, not a {}",
            object.name(),
            object.kind(),
            kind
        ));
    }
    Ok(())
}

fn build_condition(args: &SetArgs, config: &Config) -> Result<Condition> {
    let t = ConditionType::from(args.condition_type.as_str());
    let reason = args.reason.clone().unwrap_or_default();
    let message = args.message.clone().unwrap_or_default();

    let condition = match args.status {
        StatusArg::True => {
            if args.severity.is_some() {
                tracing::warn!("--severity only applies to Status=False, ignoring");
            }
            Condition {
                reason,
                message,
                ..true_condition(t)
            }
        }
        StatusArg::False => {
            let severity = match args.severity.as_deref() {
                Some(s) => ConditionSeverity::from_str_case_insensitive(s)
                    .ok_or_else(|| anyhow::anyhow!("Unknown severity: {}", s))?,
                None => config.default_severity,
            };
            false_condition(t, reason, severity, message)
        }
        StatusArg::Unknown => {
            if args.severity.is_some() {
                tracing::warn!("--severity only applies to Status=False, ignoring");
            }
            unknown_condition(t, reason, message)
        }
    };

    Ok(condition)
}

/// Compare the conditions of two documents
///
/// Returns whether they match; mismatches are reported on stderr.
pub fn handle_match(actual: &Path, expected: &Path, condition_type: Option<&str>) -> Result<bool> {
    let actual_conditions = read_conditions(actual)?;
    let expected_conditions = read_conditions(expected)?;

    let matched = match condition_type {
        Some(t) => {
            let t = ConditionType::from(t);
            let expected_condition = getter::get(&expected_conditions, &t)
                .ok_or_else(|| anyhow::anyhow!("{} has no {} condition", expected.display(), t))?;
            let matcher = match_condition(expected_condition);
            match getter::get(&actual_conditions, &t) {
                Some(actual_condition) if matcher.matches(&actual_condition) => true,
                Some(actual_condition) => {
                    eprintln!("{}", matcher.failure_message(&actual_condition));
                    false
                }
                None => {
                    eprintln!("{} has no {} condition", actual.display(), t);
                    false
                }
            }
        }
        None => {
            let matcher = match_conditions(expected_conditions);
            let matched = matcher.matches(&actual_conditions);
            if !matched {
                eprintln!("{}", matcher.failure_message(&actual_conditions));
            }
            matched
        }
    };

    if matched {
        println!("Conditions match");
    }
    Ok(matched)
}

/// List the supported resource kinds
pub fn handle_kinds() {
    println!("Supported kinds:");
    for entry in registry::RESOURCE_REGISTRY {
        println!(
            "  - {} ({}) aliases: {}",
            entry.kind,
            entry.group_version(),
            entry.command_aliases.join(", ")
        );
    }
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = machine_conditions::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            let path = paths::root_config_path();
            let mut config = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigLoader::load_defaults()
            };

            machine_conditions::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MACHINE: &str = r#"apiVersion: machine.openshift.io/v1beta1
kind: Machine
metadata:
  name: worker-0
  namespace: openshift-machine-api
status:
  conditions:
  - type: Drainable
    status: "False"
    reason: DrainFailed
    severity: Warning
    message: 2 pods could not be evicted
    lastTransitionTime: "2024-01-01T00:00:00Z"
  - type: Ready
    status: "True"
    lastTransitionTime: "2024-01-01T00:00:00Z"
"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn set_args(status: StatusArg, severity: Option<&str>) -> SetArgs {
        SetArgs {
            file: PathBuf::from("-"),
            condition_type: "Terminable".to_string(),
            status,
            reason: Some("InstanceStopping".to_string()),
            severity: severity.map(str::to_string),
            message: Some("waiting for the instance".to_string()),
            in_place: false,
            kind: None,
        }
    }

    fn config_with_severity(severity: ConditionSeverity) -> Config {
        Config {
            default_severity: severity,
            ..Default::default()
        }
    }

    #[test]
    fn test_false_without_severity_uses_configured_default() {
        let config = config_with_severity(ConditionSeverity::Warning);
        let condition = build_condition(&set_args(StatusArg::False, None), &config).unwrap();

        assert_eq!(condition.status, machine_conditions::ConditionStatus::False);
        assert_eq!(condition.severity, ConditionSeverity::Warning);
        assert_eq!(condition.reason, "InstanceStopping");
        assert_eq!(condition.message, "waiting for the instance");
    }

    #[test]
    fn test_false_with_explicit_severity() {
        let config = config_with_severity(ConditionSeverity::Warning);
        let condition =
            build_condition(&set_args(StatusArg::False, Some("info")), &config).unwrap();

        assert_eq!(condition.severity, ConditionSeverity::Info);
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let config = Config::default();
        let err = build_condition(&set_args(StatusArg::False, Some("fatal")), &config).unwrap_err();

        assert!(err.to_string().contains("Unknown severity: fatal"));
    }

    #[test]
    fn test_severity_ignored_unless_false() {
        let config = config_with_severity(ConditionSeverity::Error);

        let condition =
            build_condition(&set_args(StatusArg::True, Some("Error")), &config).unwrap();
        assert_eq!(condition.status, machine_conditions::ConditionStatus::True);
        assert!(condition.severity.is_none());
        assert_eq!(condition.reason, "InstanceStopping");

        let condition =
            build_condition(&set_args(StatusArg::Unknown, Some("bogus")), &config).unwrap();
        assert_eq!(condition.status, machine_conditions::ConditionStatus::Unknown);
        assert!(condition.severity.is_none());
    }

    #[test]
    fn test_match_single_type() {
        let dir = tempfile::tempdir().unwrap();
        let actual = write(&dir, "actual.yaml", MACHINE);
        let expected = write(
            &dir,
            "expected.yaml",
            "- type: Ready\n  status: \"True\"\n  lastTransitionTime: \"2030-01-01T00:00:00Z\"\n",
        );

        assert!(handle_match(&actual, &expected, Some("Ready")).unwrap());
    }

    #[test]
    fn test_match_single_type_differs() {
        let dir = tempfile::tempdir().unwrap();
        let actual = write(&dir, "actual.yaml", MACHINE);
        let expected = write(
            &dir,
            "expected.yaml",
            "- type: Drainable\n  status: \"False\"\n  reason: DrainFailed\n  severity: Error\n  message: 2 pods could not be evicted\n",
        );

        assert!(!handle_match(&actual, &expected, Some("Drainable")).unwrap());
    }

    #[test]
    fn test_match_type_missing_from_actual() {
        let dir = tempfile::tempdir().unwrap();
        let actual = write(&dir, "actual.yaml", MACHINE);
        let expected = write(&dir, "expected.yaml", "- type: Terminable\n  status: \"True\"\n");

        assert!(!handle_match(&actual, &expected, Some("Terminable")).unwrap());
    }

    #[test]
    fn test_match_type_missing_from_expected() {
        let dir = tempfile::tempdir().unwrap();
        let actual = write(&dir, "actual.yaml", MACHINE);
        let expected = write(&dir, "expected.yaml", "- type: Ready\n  status: \"True\"\n");

        let err = handle_match(&actual, &expected, Some("Drainable")).unwrap_err();
        assert!(err.to_string().contains("has no Drainable condition"));
    }

    #[test]
    fn test_match_whole_list_is_order_and_length_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let actual = write(&dir, "actual.yaml", MACHINE);
        let same = write(&dir, "same.yaml", MACHINE);
        let shorter = write(&dir, "shorter.yaml", "- type: Ready\n  status: \"True\"\n");

        assert!(handle_match(&actual, &same, None).unwrap());
        assert!(!handle_match(&actual, &shorter, None).unwrap());
    }

    #[test]
    fn test_set_in_place_rewrites_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(&dir, "machine.yaml", MACHINE);
        let args = SetArgs {
            file: file.clone(),
            in_place: true,
            kind: Some("ma".to_string()),
            ..set_args(StatusArg::False, None)
        };

        handle_set(args, &Config::default(), OutputFormat::Yaml).unwrap();

        let object = read_object(&file).unwrap();
        let t = ConditionType::from("Terminable");
        assert!(getter::is_false(&object, &t));
        assert_eq!(getter::get_severity(&object, &t), Some(ConditionSeverity::Error));
        assert!(getter::is_true(&object, &ConditionType::READY));
        assert_eq!(object.conditions().len(), 3);
    }

    #[test]
    fn test_set_rejects_other_kind() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(&dir, "machine.yaml", MACHINE);
        let args = SetArgs {
            file: file.clone(),
            in_place: true,
            kind: Some("mhc".to_string()),
            ..set_args(StatusArg::True, None)
        };

        let err = handle_set(args, &Config::default(), OutputFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("is a Machine, not a MachineHealthCheck"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), MACHINE);
    }

    #[test]
    fn test_check_kind_accepts_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let object = read_object(&write(&dir, "machine.yaml", MACHINE)).unwrap();

        assert!(check_kind(&object, None).is_ok());
        assert!(check_kind(&object, Some("Machines")).is_ok());
        assert!(check_kind(&object, Some("ma")).is_ok());
        assert!(check_kind(&object, Some("mhc")).is_err());

        let err = check_kind(&object, Some("pod")).unwrap_err();
        assert!(err.to_string().contains("Unknown kind: pod"));
    }
}
