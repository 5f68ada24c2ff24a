pub mod validation;

pub use validation::{RequiredField, ensure_valid_deployment, validate_deployment};

use config::{Config, Environment, File, Map};
use mona_domain::config::AppConfig;
use mona_domain::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while loading or validating configuration.
#[mona_derive::mona_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// One or more required deployment settings are empty. The application must not start.
    #[error(
        "Invalid deployment configuration{}: missing {}",
        format_context(.context),
        join_fields(.missing)
    )]
    InvalidDeployment { missing: Vec<RequiredField>, context: Option<Cow<'static, str>> },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields.iter().map(|f| f.display_name()).collect::<Vec<_>>().join(", ")
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `mona.toml`). If no path is provided, it defaults to `"mona"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `MONA__`.
///    Nested structures are accessed using double underscores (e.g., `MONA__DEPLOYMENT__NAME` maps to `deployment.name`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_config(path, environment())
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// Keys keep their `MONA__` prefix, e.g. `MONA__DEPLOYMENT__AZURE_SUBSCRIPTION_ID`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_config(path, environment().source(Some(vars)))
}

/// Loads the application configuration. Validation is a separate step, see
/// [`validation::ensure_valid_deployment`].
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

fn environment() -> Environment {
    Environment::with_prefix(CONFIG_ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

fn build_config<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
