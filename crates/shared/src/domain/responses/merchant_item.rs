use crate::model::{item::Item, transaction::TransactionModel, user::MerchantUserModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MerchantItemsResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Item>,
}

impl From<MerchantUserModel> for MerchantItemsResponse {
    fn from(model: MerchantUserModel) -> Self {
        Self {
            items: model.into_items(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MerchantSummaryResponse {
    pub wallet_balance: f64,
    pub total_items: usize,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_items_sold: f64,
}

impl MerchantSummaryResponse {
    pub fn from_parts(merchant: &MerchantUserModel, purchases: &[TransactionModel]) -> Self {
        let items = merchant.items();

        let total_cost: f64 = items.iter().map(Item::cost).sum();
        let total_revenue: f64 = items.iter().map(Item::revenue).sum();
        let total_items_sold = purchases.iter().map(TransactionModel::items_sold).sum();

        Self {
            wallet_balance: merchant.wallet_balance(),
            total_items: items.len(),
            total_cost,
            total_revenue,
            total_profit: total_revenue - total_cost,
            total_items_sold,
        }
    }
}
