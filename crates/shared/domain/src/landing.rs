use serde::{Deserialize, Serialize};

/// Presentation model for the subscription landing page.
///
/// Starts empty and is filled from user claims, offer configuration, the subscription,
/// the deployment and an optional error code. It lives for a single render.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingPageModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_test_mode: Option<bool>,

    // Offer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_marketing_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_marketplace_listing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_contact_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_copyright_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_home_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_privacy_notice_page_url: Option<String>,

    // Subscription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_trial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_email_address: Option<String>,
}

impl LandingPageModel {
    /// Whether the page should render the failure state.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error_code.is_some()
    }
}
