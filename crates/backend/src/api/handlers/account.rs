use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use contracts::domain::account::AccountDto;
use serde::Deserialize;

use super::{respond, validation_failure};
use crate::domain::account::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
pub struct AccountIdQuery {
    pub id: i32,
}

/// GET /api/Account/GetAllAccounts
pub async fn get_all_accounts() -> (StatusCode, Json<ApiResponse<Vec<AccountDto>>>) {
    respond(service::get_all_accounts(get_connection()).await)
}

/// GET /api/Account/GetAccountById?id=
pub async fn get_account_by_id(
    Query(query): Query<AccountIdQuery>,
) -> (StatusCode, Json<ApiResponse<AccountDto>>) {
    respond(service::get_account_by_id(get_connection(), query.id).await)
}

/// POST /api/Account/CreateAccount
pub async fn create_account(
    payload: Result<Json<AccountDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<AccountDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::create_account(get_connection(), dto).await)
}

/// PUT /api/Account/UpdateAccount
pub async fn update_account(
    payload: Result<Json<AccountDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<AccountDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::update_account(get_connection(), dto).await)
}

/// DELETE /api/Account/DeleteAccount?id=
pub async fn delete_account(
    Query(query): Query<AccountIdQuery>,
) -> (StatusCode, Json<ApiResponse<bool>>) {
    respond(service::delete_account(get_connection(), query.id).await)
}
