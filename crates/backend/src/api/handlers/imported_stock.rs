use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use contracts::domain::catalog::ImportedStockDto;
use serde::Deserialize;

use super::{respond, validation_failure};
use crate::domain::imported_stock::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedIdQuery {
    pub imported_id: i32,
}

/// GET /api/ImportedStock/GetAllImportedStock
pub async fn get_all_imported_stock() -> (StatusCode, Json<ApiResponse<Vec<ImportedStockDto>>>) {
    respond(service::get_all_imported_stocks(get_connection()).await)
}

/// GET /api/ImportedStock/GetImportedStockById?importedId=
pub async fn get_imported_stock_by_id(
    Query(query): Query<ImportedIdQuery>,
) -> (StatusCode, Json<ApiResponse<ImportedStockDto>>) {
    respond(service::get_imported_stock_by_id(get_connection(), query.imported_id).await)
}

/// POST /api/ImportedStock/CreateImportedStock
pub async fn create_imported_stock(
    payload: Result<Json<ImportedStockDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ImportedStockDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::create_imported_stock(get_connection(), dto).await)
}

/// PUT /api/ImportedStock/UpdateImportedStock
pub async fn update_imported_stock(
    payload: Result<Json<ImportedStockDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ImportedStockDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::update_imported_stock(get_connection(), dto).await)
}

/// DELETE /api/ImportedStock/DeleteImportedStock?importedId=
pub async fn delete_imported_stock(
    Query(query): Query<ImportedIdQuery>,
) -> (StatusCode, Json<ApiResponse<bool>>) {
    respond(service::delete_imported_stock(get_connection(), query.imported_id).await)
}
