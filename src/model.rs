use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Scheme {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub inventory: Option<i64>,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct InventoryBatch {
    pub batch_id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct NewBatch {
    pub product_id: i64,
    pub quantity: i64,
    pub expiry_date: String,
    pub supplier_name: String,
    pub order_date: String,
    pub delivery_date: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ReduceRequest {
    pub inventory_id: i64,
    pub quantity: i64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct InvoiceItem {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct InvoiceRequest {
    pub user_id: i64,
    pub items: Vec<InvoiceItem>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DemandPrediction {
    #[serde(deserialize_with = "number_or_string")]
    pub predicted_demand: f64,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySales>,
    #[serde(default)]
    pub inventory: Vec<InventoryLevel>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "number_or_string")]
    pub sales: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub count: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    #[serde(deserialize_with = "number_or_string")]
    pub total: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct InventoryLevel {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "number_or_string")]
    pub inventory: f64,
}

/// SQL aggregates come back as JSON numbers or as decimal strings; null counts as 0.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {}", s))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scheme_reads_type_field_and_optional_icon() {
        let raw = r#"[
            {"name": "Digital MSME Scheme", "description": "Cloud tools", "link": "https://msme.gov.in/",
             "category": "Technology", "icon": "💻", "type": "Retail Tech"},
            {"name": "Plain", "description": "", "link": "", "category": "Finance", "type": "Retail"}
        ]"#;
        let schemes: Vec<Scheme> = serde_json::from_str(raw).unwrap();
        assert_eq!(schemes[0].kind, "Retail Tech");
        assert_eq!(schemes[0].icon.as_deref(), Some("💻"));
        assert_eq!(schemes[1].icon, None);
    }

    #[test]
    fn analytics_accepts_decimal_strings_and_missing_sections() {
        let raw = r#"{
            "top_products": [{"name": "Rice", "category": "Grains", "sales": "42"}],
            "monthly_sales": [{"month": "2025-04", "total": 17.5}, {"month": "2025-05", "total": null}]
        }"#;
        let analytics: Analytics = serde_json::from_str(raw).unwrap();
        assert_eq!(analytics.top_products[0].sales, 42.0);
        assert_eq!(analytics.monthly_sales[0].total, 17.5);
        assert_eq!(analytics.monthly_sales[1].total, 0.0);
        assert!(analytics.categories.is_empty());
        assert!(analytics.inventory.is_empty());
    }

    #[test]
    fn inventory_listing_tolerates_missing_columns() {
        let raw = r#"{"batch_id": 3, "product_name": "Milk", "category": "Dairy", "quantity": 12,
                      "expiry_date": "Tue, 01 Jul 2025 00:00:00 GMT", "supplier_name": "Amul"}"#;
        let batch: InventoryBatch = serde_json::from_str(raw).unwrap();
        assert_eq!(batch.batch_id, 3);
        assert_eq!(batch.order_date, None);
        assert_eq!(batch.product_id, None);
    }

    #[test]
    fn invoice_request_wire_shape() {
        let req = InvoiceRequest {
            user_id: 1,
            items: vec![InvoiceItem { product_id: 4, quantity: 2 }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"user_id": 1, "items": [{"product_id": 4, "quantity": 2}]})
        );
    }
}
