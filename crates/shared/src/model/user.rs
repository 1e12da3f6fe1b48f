use crate::model::item::Item;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

pub const MERCHANT_ROLE: &str = "merchant";

/// A `users` row joined with the balance of its wallet, if any.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MerchantUserModel {
    pub id: i32,
    pub user_id: String,
    pub role: String,
    pub items: Option<Json<Vec<Item>>>,
    pub wallet_id: Option<String>,
    pub wallet_balance: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl MerchantUserModel {
    pub fn items(&self) -> &[Item] {
        self.items.as_ref().map(|items| items.0.as_slice()).unwrap_or(&[])
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items.map(|items| items.0).unwrap_or_default()
    }

    pub fn wallet_balance(&self) -> f64 {
        self.wallet_balance.unwrap_or(0.0)
    }
}
