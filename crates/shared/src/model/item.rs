use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const COST_PRICE: &str = "costPrice";
const SELLING_PRICE: &str = "sellingPrice";

/// One inventory entry of a merchant. The stored document is kept as is,
/// number forms and explicit nulls included; prices are only read from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    pub attributes: Map<String, Value>,
}

impl Item {
    /// `costPrice`, or 0 when absent, null or not a number.
    pub fn cost(&self) -> f64 {
        self.price(COST_PRICE)
    }

    /// `sellingPrice`, or 0 when absent, null or not a number.
    pub fn revenue(&self) -> f64 {
        self.price(SELLING_PRICE)
    }

    fn price(&self, key: &str) -> f64 {
        self.attributes
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_document_verbatim() {
        let raw = json!({ "name": "Rice 5kg", "costPrice": 10, "sellingPrice": null, "sku": "R-5" });
        let item: Item = serde_json::from_value(raw.clone()).expect("item should parse");

        assert_eq!(item.cost(), 10.0);
        assert_eq!(item.revenue(), 0.0);

        let back = serde_json::to_value(&item).expect("item should serialize");
        assert_eq!(back, raw);
        assert_eq!(
            serde_json::to_string(&back["costPrice"]).expect("number serializes"),
            "10"
        );
    }

    #[test]
    fn missing_or_non_numeric_prices_count_as_zero() {
        assert_eq!(Item::default().cost(), 0.0);

        let item: Item = serde_json::from_value(json!({ "costPrice": "cheap", "sellingPrice": 2.5 }))
            .expect("item should parse");
        assert_eq!(item.cost(), 0.0);
        assert_eq!(item.revenue(), 2.5);
    }
}
