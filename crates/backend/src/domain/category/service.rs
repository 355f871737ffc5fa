use contracts::api::ApiResponse;
use contracts::domain::catalog::CategoryDto;
use sea_orm::{DatabaseConnection, IntoActiveModel, Set};

use super::repository::{self, Entity};
use crate::shared::data::crud;

pub async fn get_all_categories(db: &DatabaseConnection) -> ApiResponse<Vec<CategoryDto>> {
    match crud::get_all::<Entity, _>(db).await {
        Ok(rows) => ApiResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            "Categories list retrieved successfully.",
        ),
        Err(e) => {
            tracing::error!("Failed to list categories: {e}");
            ApiResponse::fail("Failed to retrieve categories.")
        }
    }
}

pub async fn get_category_by_id(db: &DatabaseConnection, id: i32) -> ApiResponse<CategoryDto> {
    match crud::get_by_id::<Entity, _>(db, id).await {
        Ok(Some(row)) => ApiResponse::ok(row.into(), "Category retrieved successfully."),
        Ok(None) => ApiResponse::fail("Category not found."),
        Err(e) => {
            tracing::error!("Failed to get category {id}: {e}");
            ApiResponse::fail("Failed to retrieve category.")
        }
    }
}

pub async fn create_category(db: &DatabaseConnection, dto: CategoryDto) -> ApiResponse<CategoryDto> {
    let model = repository::ActiveModel {
        category_name: Set(dto.category_name),
        description: Set(dto.description),
        ..Default::default()
    };
    match crud::insert(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Category created successfully."),
        Err(e) => {
            tracing::error!("Failed to create category: {e}");
            ApiResponse::fail("Failed to create category.")
        }
    }
}

pub async fn update_category(db: &DatabaseConnection, dto: CategoryDto) -> ApiResponse<CategoryDto> {
    let existing = match crud::get_by_id::<Entity, _>(db, dto.category_id).await {
        Ok(Some(row)) => row,
        Ok(None) => return ApiResponse::fail("Category not found."),
        Err(e) => {
            tracing::error!("Failed to get category {}: {e}", dto.category_id);
            return ApiResponse::fail("Failed to update category.");
        }
    };

    let mut model = existing.into_active_model();
    model.category_name = Set(dto.category_name);
    model.description = Set(dto.description);
    match crud::update(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Category updated successfully."),
        Err(e) => {
            tracing::error!("Failed to update category {}: {e}", dto.category_id);
            ApiResponse::fail("Failed to update category.")
        }
    }
}

pub async fn delete_category(db: &DatabaseConnection, id: i32) -> ApiResponse<bool> {
    match crud::delete_by_id::<Entity, _>(db, id).await {
        Ok(true) => ApiResponse::ok(true, "Category deleted successfully."),
        Ok(false) => ApiResponse::fail("Category not found."),
        Err(e) => {
            tracing::error!("Failed to delete category {id}: {e}");
            ApiResponse::fail("Failed to delete category.")
        }
    }
}
