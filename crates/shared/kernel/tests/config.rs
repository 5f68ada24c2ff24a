use mona_kernel::config::{
    ConfigError, RequiredField, ensure_valid_deployment, load_app_config, load_config_with_env,
    validate_deployment,
};
use mona_kernel::domain::config::{AppConfig, DeploymentConfiguration};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const COMPLETE: &str = r#"
[deployment]
name = "contoso"
mona_version = "0.1"
app_insights_connection_string = "InstrumentationKey=abc"
azure_subscription_id = "0000-1111"
azure_resource_group_name = "rg-mona"

[offer]
offer_display_name = "Contoso Cloud"
publisher_display_name = "Contoso"

[logging]
level = "debug"
"#;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mona.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

fn complete_deployment() -> DeploymentConfiguration {
    DeploymentConfiguration {
        name: "contoso".to_owned(),
        mona_version: "0.1".to_owned(),
        app_insights_connection_string: "InstrumentationKey=abc".to_owned(),
        azure_subscription_id: "0000-1111".to_owned(),
        azure_resource_group_name: "rg-mona".to_owned(),
        is_test_mode_enabled: false,
    }
}

#[test]
fn loads_config_from_file() {
    let (_dir, path) = write_config(COMPLETE);

    let cfg = load_app_config(Some(&path)).expect("load config");
    assert_eq!(cfg.deployment.name, "contoso");
    assert!(!cfg.deployment.is_test_mode_enabled);
    assert_eq!(cfg.offer.publisher_display_name.as_deref(), Some("Contoso"));
    assert_eq!(cfg.logging.level, "debug");
    assert!(validate_deployment(&cfg.deployment).is_empty());
}

#[test]
fn environment_overrides_file_values() {
    let (_dir, path) = write_config(COMPLETE);
    let mut vars = config::Map::new();
    vars.insert("MONA__DEPLOYMENT__AZURE_SUBSCRIPTION_ID".to_owned(), "2222-3333".to_owned());
    vars.insert("MONA__DEPLOYMENT__IS_TEST_MODE_ENABLED".to_owned(), "true".to_owned());

    let cfg: AppConfig = load_config_with_env(Some(&path), vars).expect("load config");
    assert_eq!(cfg.deployment.azure_subscription_id, "2222-3333");
    assert!(cfg.deployment.is_test_mode_enabled);
    assert_eq!(cfg.deployment.name, "contoso");
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_app_config(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn incomplete_file_loads_but_fails_validation() {
    let (_dir, path) = write_config("[deployment]\nname = \"contoso\"\n");

    let cfg = load_app_config(Some(&path)).expect("load config");
    assert_eq!(
        validate_deployment(&cfg.deployment),
        vec![
            RequiredField::MonaVersion,
            RequiredField::AppInsightsConnectionString,
            RequiredField::AzureSubscriptionId,
            RequiredField::AzureResourceGroupName,
        ]
    );
}

#[test]
fn complete_deployment_is_valid_with_test_mode_disabled() {
    let deployment = complete_deployment();

    assert!(ensure_valid_deployment(&deployment).is_ok());
    assert!(!deployment.is_test_mode_enabled);
}

#[test]
fn each_missing_field_is_reported() {
    for field in RequiredField::ALL {
        let mut deployment = complete_deployment();
        match field {
            RequiredField::Name => deployment.name.clear(),
            RequiredField::MonaVersion => deployment.mona_version.clear(),
            RequiredField::AppInsightsConnectionString => {
                deployment.app_insights_connection_string.clear();
            }
            RequiredField::AzureSubscriptionId => deployment.azure_subscription_id.clear(),
            RequiredField::AzureResourceGroupName => deployment.azure_resource_group_name.clear(),
        }

        let err = ensure_valid_deployment(&deployment).unwrap_err();
        assert!(
            matches!(&err, ConfigError::InvalidDeployment { missing, .. } if missing == &[field]),
            "expected only {field} to be missing, got {err}"
        );
    }
}

#[test]
fn empty_deployment_reports_all_fields_in_order() {
    let missing = validate_deployment(&DeploymentConfiguration::default());
    assert_eq!(missing, RequiredField::ALL);
}
