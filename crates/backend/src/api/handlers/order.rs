use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use contracts::domain::order::{OrderResponse, OrderWithDetailsRequest};
use contracts::pagination::{PageRequest, PaginatedResult};
use serde::Deserialize;

use super::{respond, validation_failure};
use crate::domain::order::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdQuery {
    pub order_id: i32,
}

/// GET /api/Order/GetAllOrders
pub async fn get_all_orders() -> (StatusCode, Json<ApiResponse<Vec<OrderResponse>>>) {
    respond(service::get_all_orders(get_connection()).await)
}

/// GET /api/Order/GetOrderById?orderId=
pub async fn get_order_by_id(
    Query(query): Query<OrderIdQuery>,
) -> (StatusCode, Json<ApiResponse<OrderResponse>>) {
    respond(service::get_order_by_id(get_connection(), query.order_id).await)
}

/// POST /api/Order/CreateOrder
pub async fn create_order(
    payload: Result<Json<OrderWithDetailsRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<OrderResponse>>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::create_order(get_connection(), request).await)
}

/// PUT /api/Order/UpdateOrder
pub async fn update_order(
    payload: Result<Json<OrderWithDetailsRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<OrderResponse>>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(rejection),
    };
    respond(service::update_order(get_connection(), request).await)
}

/// DELETE /api/Order/DeleteOrder?orderId=
pub async fn delete_order(
    Query(query): Query<OrderIdQuery>,
) -> (StatusCode, Json<ApiResponse<bool>>) {
    respond(service::delete_order(get_connection(), query.order_id).await)
}

/// GET /api/Order/GetOrdersPaginated?pageNumber=&pageSize=
pub async fn get_orders_paginated(
    Query(page): Query<PageRequest>,
) -> (StatusCode, Json<ApiResponse<PaginatedResult<OrderResponse>>>) {
    respond(service::get_orders_paginated(get_connection(), page).await)
}

/// GET /api/Order/GetLatestOrder
pub async fn get_latest_order() -> (StatusCode, Json<ApiResponse<OrderResponse>>) {
    respond(service::get_latest_order(get_connection()).await)
}
