use serde::{Deserialize, Serialize};

/// A customer's purchase of an offer plan.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub subscription_id: String,
    pub subscription_name: String,
    pub offer_id: String,
    pub plan_id: String,
    pub seat_quantity: Option<u32>,
    pub is_free_trial: bool,
    /// The user who bought the subscription.
    pub purchaser: Option<MarketplaceUser>,
    /// The user the subscription was bought for.
    pub beneficiary: Option<MarketplaceUser>,
}

/// A party (purchaser or beneficiary) on a [`Subscription`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceUser {
    pub user_id: Option<String>,
    pub user_email: String,
    pub aad_object_id: Option<String>,
    pub aad_tenant_id: Option<String>,
}
