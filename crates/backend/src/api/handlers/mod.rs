use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use contracts::api::ApiResponse;
use serde::Serialize;

pub mod account;
pub mod category;
pub mod imported_stock;
pub mod order;
pub mod product;

/// 200 when the service succeeded, 400 otherwise. The envelope body is the
/// same in both cases.
fn respond<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = if response.succeeded {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

/// A body that failed to deserialize still answers with the envelope.
fn validation_failure<T: Serialize>(
    rejection: JsonRejection,
) -> (StatusCode, Json<ApiResponse<T>>) {
    respond(ApiResponse::fail_with(
        "Validation failure.",
        vec![rejection.body_text()],
    ))
}
