use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, types::Json};

pub const PURCHASE_TYPE: &str = "purchase";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub transaction_type: String,
    pub merchant_id: String,
    pub items: Option<Json<Value>>,
    pub created_at: Option<NaiveDateTime>,
}

impl TransactionModel {
    /// Units sold by this transaction. Quantities are taken as stored, so
    /// fractional amounts are kept. A line whose quantity is absent, null,
    /// zero or not a number counts as one unit; a non-array `items` value
    /// counts as nothing.
    pub fn items_sold(&self) -> f64 {
        match self.items.as_ref().map(|items| &items.0) {
            Some(Value::Array(lines)) => lines.iter().map(line_quantity).sum(),
            _ => 0.0,
        }
    }
}

fn line_quantity(line: &Value) -> f64 {
    line.get("quantity")
        .and_then(Value::as_f64)
        .filter(|quantity| *quantity != 0.0)
        .unwrap_or(1.0)
}
