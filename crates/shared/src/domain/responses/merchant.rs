use crate::model::{item::Item, merchant::MerchantModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MerchantResponse {
    pub id: i32,
    pub merchant_id: String,
    pub merchant_name: String,
    pub wallet_id: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Item>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<MerchantModel> for MerchantResponse {
    fn from(model: MerchantModel) -> Self {
        Self {
            id: model.id,
            merchant_id: model.merchant_id,
            merchant_name: model.merchant_name,
            wallet_id: model.wallet_id,
            items: model.items.0,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}
