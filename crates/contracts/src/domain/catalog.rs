use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

/// Product as exposed by the product endpoints.
///
/// `quantity` is the on-hand amount; it is only ever changed through imported
/// stock records, never as a side effect of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub product_id: i32,
    pub category_id: Option<i32>,
    pub product_name: String,
    pub unit: String,
    pub selling_price: Decimal,
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i32,
}

/// Slimmed product shape embedded in order detail responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_id: i32,
    pub product_name: String,
    pub unit: String,
    pub product_category: Option<CategoryDto>,
}

/// Append-only stock adjustment audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedStockDto {
    #[serde(default)]
    pub import_id: i32,
    pub product_id: i32,
    pub stock_before_update: i32,
    pub updated_stock_quantity: i32,
    pub stock_after_update: i32,
    pub notes: Option<String>,
    pub updated_by: i32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
