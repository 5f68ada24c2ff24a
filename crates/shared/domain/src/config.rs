use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of a Mona deployment, as read from the config file and environment.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub deployment: DeploymentConfiguration,
    pub offer: OfferConfiguration,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into request handlers.
///
/// Deserializes through [`AppConfigInner`] directly rather than a flattened field, so that
/// string values coming from environment overrides still coerce into booleans and numbers.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "AppConfigInner")]
pub struct AppConfig {
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl From<AppConfigInner> for AppConfig {
    fn from(inner: AppConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// Describes one running Mona deployment.
///
/// Every string field except `is_test_mode_enabled` is required. Missing keys deserialize
/// to empty strings so that validation can report all of them at once instead of failing
/// on the first absent key.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeploymentConfiguration {
    /// Name of this deployment.
    #[serde(alias = "Name")]
    pub name: String,
    /// Mona version the deployment runs.
    #[serde(alias = "MonaVersion")]
    pub mona_version: String,
    /// Connection string used to push events and metrics to Application Insights.
    #[serde(alias = "AppInsightsConnectionString")]
    pub app_insights_connection_string: String,
    /// Azure subscription the deployment lives in.
    #[serde(alias = "AzureSubscriptionId")]
    pub azure_subscription_id: String,
    /// Azure resource group the deployment lives in.
    #[serde(alias = "AzureResourceGroupName")]
    pub azure_resource_group_name: String,
    /// Whether test subscriptions may be processed. Disabled unless set.
    #[serde(alias = "IsTestModeEnabled")]
    pub is_test_mode_enabled: bool,
}

/// Marketing and publisher information about the offer this deployment sells.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfferConfiguration {
    #[serde(alias = "OfferDisplayName")]
    pub offer_display_name: Option<String>,
    #[serde(alias = "OfferMarketingPageUrl")]
    pub offer_marketing_page_url: Option<String>,
    #[serde(alias = "OfferMarketplaceListingUrl")]
    pub offer_marketplace_listing_url: Option<String>,
    #[serde(alias = "PublisherContactPageUrl")]
    pub publisher_contact_page_url: Option<String>,
    #[serde(alias = "PublisherCopyrightNotice")]
    pub publisher_copyright_notice: Option<String>,
    #[serde(alias = "PublisherDisplayName")]
    pub publisher_display_name: Option<String>,
    #[serde(alias = "PublisherHomePageUrl")]
    pub publisher_home_page_url: Option<String>,
    #[serde(alias = "PublisherPrivacyNoticePageUrl")]
    pub publisher_privacy_notice_page_url: Option<String>,
}

/// Console/file logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `mona_landing=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
    /// Number of rotated files to keep.
    pub max_files: usize,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            directory: None,
            json: false,
            max_files: 10,
        }
    }
}
