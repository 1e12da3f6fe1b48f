use crate::model::item::Item;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// A row of the standalone `merchants` registry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MerchantModel {
    pub id: i32,
    pub merchant_id: String,
    pub merchant_name: String,
    pub wallet_id: Option<String>,
    pub items: Json<Vec<Item>>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
