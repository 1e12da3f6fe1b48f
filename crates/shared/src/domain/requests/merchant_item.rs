use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Full replacement of a merchant's item sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceMerchantItemsRequest {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Item>,
}
