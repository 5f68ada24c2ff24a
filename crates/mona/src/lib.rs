//! Facade crate for Mona features and shared modules.
//! Re-exports domain/kernel primitives and the landing page feature, and owns the startup gate.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! Call [`bootstrap`] once at process start. It refuses to hand out a configuration whose
//! deployment section is incomplete, so nothing downstream ever sees an invalid deployment.

pub use mona_domain as domain;
pub use mona_kernel as kernel;
pub use mona_landing as landing;

use mona_domain::config::AppConfig;
use mona_kernel::config::validation::ensure_valid_deployment;
use mona_kernel::config::{ConfigError, load_app_config};
use std::path::Path;
use tracing::info;

/// Loads the application configuration and validates the deployment contract.
///
/// # Errors
/// * [`ConfigError::Config`] if the file is missing or malformed.
/// * [`ConfigError::InvalidDeployment`] if any required deployment setting is empty.
pub fn bootstrap(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    let config = load_app_config(path)?;
    ensure_valid(config)
}

/// Validates an already loaded configuration; see [`bootstrap`].
///
/// # Errors
/// Returns [`ConfigError::InvalidDeployment`] if any required deployment setting is empty.
pub fn ensure_valid(config: AppConfig) -> Result<AppConfig, ConfigError> {
    ensure_valid_deployment(&config.deployment)?;

    info!(
        deployment = %config.deployment.name,
        version = %config.deployment.mona_version,
        test_mode = config.deployment.is_test_mode_enabled,
        "Deployment configuration is valid"
    );
    Ok(config)
}
