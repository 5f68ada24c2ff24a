//! Startup validation of [`DeploymentConfiguration`].
//!
//! Runs once, before the application accepts traffic. A deployment is valid only when every
//! [`RequiredField`] holds a non-blank value; `is_test_mode_enabled` is unconstrained.

use super::ConfigError;
use mona_domain::config::DeploymentConfiguration;
use std::fmt;
use tracing::error;

/// A deployment setting that must be present before the application may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    MonaVersion,
    AppInsightsConnectionString,
    AzureSubscriptionId,
    AzureResourceGroupName,
}

impl RequiredField {
    /// All required fields in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::MonaVersion,
        Self::AppInsightsConnectionString,
        Self::AzureSubscriptionId,
        Self::AzureResourceGroupName,
    ];

    /// Key under the `deployment` section of the config file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MonaVersion => "mona_version",
            Self::AppInsightsConnectionString => "app_insights_connection_string",
            Self::AzureSubscriptionId => "azure_subscription_id",
            Self::AzureResourceGroupName => "azure_resource_group_name",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::MonaVersion => "MonaVersion",
            Self::AppInsightsConnectionString => "AppInsightsConnectionString",
            Self::AzureSubscriptionId => "AzureSubscriptionId",
            Self::AzureResourceGroupName => "AzureResourceGroupName",
        }
    }

    fn value(self, deployment: &DeploymentConfiguration) -> &str {
        match self {
            Self::Name => &deployment.name,
            Self::MonaVersion => &deployment.mona_version,
            Self::AppInsightsConnectionString => &deployment.app_insights_connection_string,
            Self::AzureSubscriptionId => &deployment.azure_subscription_id,
            Self::AzureResourceGroupName => &deployment.azure_resource_group_name,
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returns the required fields that are empty or whitespace-only, in declaration order.
///
/// An empty result means the deployment is valid.
#[must_use]
pub fn validate_deployment(deployment: &DeploymentConfiguration) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| field.value(deployment).trim().is_empty())
        .collect()
}

/// Fails fast when [`validate_deployment`] reports any missing field.
///
/// # Errors
/// Returns [`ConfigError::InvalidDeployment`] listing every missing field.
pub fn ensure_valid_deployment(deployment: &DeploymentConfiguration) -> Result<(), ConfigError> {
    let missing = validate_deployment(deployment);
    if missing.is_empty() {
        return Ok(());
    }

    for field in &missing {
        error!(field = %field, key = field.key(), "Required deployment setting is missing");
    }

    Err(ConfigError::InvalidDeployment { missing, context: None })
}
