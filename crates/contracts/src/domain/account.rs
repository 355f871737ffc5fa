use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account roles as stored in the `role` column.
pub const ROLE_ADMIN: i32 = 1;
pub const ROLE_STAFF: i32 = 2;
pub const ROLE_CUSTOMER: i32 = 3;

/// Full account record as accepted and returned by the account endpoints.
///
/// The password travels as an opaque string; the source system stores it
/// unhashed and this rewrite keeps the field shape untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    #[serde(default)]
    pub account_id: i32,
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub role: i32,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<bool>,
}

/// Slimmed account shape embedded in order responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: i32,
    pub full_name: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}
