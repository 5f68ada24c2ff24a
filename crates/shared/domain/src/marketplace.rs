use serde::{Deserialize, Serialize};

/// Error payload returned by the Azure Marketplace fulfillment API.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceError {
    pub error_id: Option<String>,
    pub error_code: Option<String>,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}
