use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use contracts::domain::catalog::CategoryDto;
use serde::Deserialize;

use super::{respond, validation_failure};
use crate::domain::category::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
pub struct CategoryIdQuery {
    pub id: i32,
}

/// GET /api/Category/GetAllCategories
pub async fn get_all_categories() -> (StatusCode, Json<ApiResponse<Vec<CategoryDto>>>) {
    respond(service::get_all_categories(get_connection()).await)
}

/// GET /api/Category/GetCategoryById?id=
pub async fn get_category_by_id(
    Query(query): Query<CategoryIdQuery>,
) -> (StatusCode, Json<ApiResponse<CategoryDto>>) {
    respond(service::get_category_by_id(get_connection(), query.id).await)
}

/// POST /api/Category/CreateCategory
pub async fn create_category(
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<CategoryDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::create_category(get_connection(), dto).await)
}

/// PUT /api/Category/UpdateCategory
pub async fn update_category(
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<CategoryDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::update_category(get_connection(), dto).await)
}

/// DELETE /api/Category/DeleteCategory?id=
pub async fn delete_category(
    Query(query): Query<CategoryIdQuery>,
) -> (StatusCode, Json<ApiResponse<bool>>) {
    respond(service::delete_category(get_connection(), query.id).await)
}
