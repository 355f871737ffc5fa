use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use contracts::domain::catalog::ProductDto;
use serde::Deserialize;

use super::{respond, validation_failure};
use crate::domain::product::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdQuery {
    pub product_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIdQuery {
    pub category_id: i32,
}

/// GET /api/Product/GetAllProducts
pub async fn get_all_products() -> (StatusCode, Json<ApiResponse<Vec<ProductDto>>>) {
    respond(service::get_all_products(get_connection()).await)
}

/// GET /api/Product/GetProductById?productId=
pub async fn get_product_by_id(
    Query(query): Query<ProductIdQuery>,
) -> (StatusCode, Json<ApiResponse<ProductDto>>) {
    respond(service::get_product_by_id(get_connection(), query.product_id).await)
}

/// GET /api/Product/GetProductsByCategoryId?categoryId=
pub async fn get_products_by_category_id(
    Query(query): Query<CategoryIdQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<ProductDto>>>) {
    respond(service::get_products_by_category_id(get_connection(), query.category_id).await)
}

/// POST /api/Product/CreateProduct
pub async fn create_product(
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ProductDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::create_product(get_connection(), dto).await)
}

/// PUT /api/Product/UpdateProduct
pub async fn update_product(
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ProductDto>>) {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::update_product(get_connection(), dto).await)
}

/// DELETE /api/Product/DeleteProduct?productId=
pub async fn delete_product(
    Query(query): Query<ProductIdQuery>,
) -> (StatusCode, Json<ApiResponse<bool>>) {
    respond(service::delete_product(get_connection(), query.product_id).await)
}
