use chrono::Utc;
use contracts::api::ApiResponse;
use contracts::domain::catalog::ImportedStockDto;
use sea_orm::{DatabaseConnection, IntoActiveModel, Set};

use super::repository::{self, Entity};
use crate::shared::data::crud;
use crate::shared::data::uow::PersistenceError;

pub async fn get_all_imported_stocks(db: &DatabaseConnection) -> ApiResponse<Vec<ImportedStockDto>> {
    match crud::get_all::<Entity, _>(db).await {
        Ok(rows) => ApiResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            "Imported stocks list retrieved successfully.",
        ),
        Err(e) => {
            tracing::error!("Failed to list imported stocks: {e}");
            ApiResponse::fail("Failed to retrieve imported stocks.")
        }
    }
}

pub async fn get_imported_stock_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> ApiResponse<ImportedStockDto> {
    match crud::get_by_id::<Entity, _>(db, id).await {
        Ok(Some(row)) => ApiResponse::ok(row.into(), "Imported stock retrieved successfully."),
        Ok(None) => ApiResponse::fail("Imported stock not found."),
        Err(e) => {
            tracing::error!("Failed to get imported stock {id}: {e}");
            ApiResponse::fail("Failed to retrieve imported stock.")
        }
    }
}

pub async fn create_imported_stock(
    db: &DatabaseConnection,
    dto: ImportedStockDto,
) -> ApiResponse<ImportedStockDto> {
    let model = repository::ActiveModel {
        product_id: Set(dto.product_id),
        stock_before_update: Set(dto.stock_before_update),
        updated_stock_quantity: Set(dto.updated_stock_quantity),
        stock_after_update: Set(dto.stock_after_update),
        notes: Set(dto.notes),
        updated_by: Set(dto.updated_by),
        updated_at: Set(Some(dto.updated_at.unwrap_or_else(Utc::now))),
        ..Default::default()
    };
    match crud::insert(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Imported stock created successfully."),
        Err(e) => {
            tracing::error!("Failed to create imported stock: {e}");
            match PersistenceError::from(e) {
                PersistenceError::Constraint(msg) => {
                    ApiResponse::fail_with("Failed to create imported stock.", vec![msg])
                }
                PersistenceError::Db(_) => ApiResponse::fail("Failed to create imported stock."),
            }
        }
    }
}

pub async fn update_imported_stock(
    db: &DatabaseConnection,
    dto: ImportedStockDto,
) -> ApiResponse<ImportedStockDto> {
    let existing = match crud::get_by_id::<Entity, _>(db, dto.import_id).await {
        Ok(Some(row)) => row,
        Ok(None) => return ApiResponse::fail("Imported stock not found."),
        Err(e) => {
            tracing::error!("Failed to get imported stock {}: {e}", dto.import_id);
            return ApiResponse::fail("Failed to update imported stock.");
        }
    };

    let mut model = existing.into_active_model();
    model.stock_before_update = Set(dto.stock_before_update);
    model.updated_stock_quantity = Set(dto.updated_stock_quantity);
    model.stock_after_update = Set(dto.stock_after_update);
    model.updated_by = Set(dto.updated_by);
    model.updated_at = Set(Some(dto.updated_at.unwrap_or_else(Utc::now)));
    match crud::update(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Imported stock updated successfully."),
        Err(e) => {
            tracing::error!("Failed to update imported stock {}: {e}", dto.import_id);
            ApiResponse::fail("Failed to update imported stock.")
        }
    }
}

pub async fn delete_imported_stock(db: &DatabaseConnection, id: i32) -> ApiResponse<bool> {
    match crud::delete_by_id::<Entity, _>(db, id).await {
        Ok(true) => ApiResponse::ok(true, "Imported stock deleted successfully."),
        Ok(false) => ApiResponse::fail("Imported stock not found."),
        Err(e) => {
            tracing::error!("Failed to delete imported stock {id}: {e}");
            ApiResponse::fail("Failed to delete imported stock.")
        }
    }
}
