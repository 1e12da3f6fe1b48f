use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMerchantRequest {
    #[validate(length(min = 1, message = "merchantId is required"))]
    pub merchant_id: String,

    #[validate(length(min = 1, message = "merchantName is required"))]
    pub merchant_name: String,

    #[serde(default)]
    pub wallet_id: Option<String>,
}
