use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::AccountSummary;
use super::catalog::ProductSummary;

/// Order header as supplied by callers of the create/update workflow.
///
/// `total_amount` is taken as-is; the server does not recompute it from the
/// detail lines (known divergence inherited from the source system).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHeaderDto {
    #[serde(default)]
    pub order_id: i32,
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
}

/// One order line as supplied by callers.
///
/// A caller may send `total`, but it is ignored: the stored value is always
/// the store-computed `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDto {
    #[serde(default)]
    pub detail_id: i32,
    #[serde(default)]
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub quantity: i32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// Body of the create/update order endpoints: header plus its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithDetailsRequest {
    pub order: OrderHeaderDto,
    #[serde(default)]
    pub order_details: Vec<OrderDetailDto>,
}

/// Fully materialized order aggregate returned by every order operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer: Option<AccountSummary>,
    pub staff: Option<AccountSummary>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub order_details: Vec<OrderDetailResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub detail_id: i32,
    pub product: Option<ProductSummary>,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub total: Option<Decimal>,
}
