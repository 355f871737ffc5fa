use contracts::api::ApiResponse;
use contracts::domain::catalog::ProductDto;
use sea_orm::{DatabaseConnection, IntoActiveModel, Set};

use super::repository::{self, Entity};
use crate::shared::data::crud;
use crate::shared::data::uow::PersistenceError;

pub async fn get_all_products(db: &DatabaseConnection) -> ApiResponse<Vec<ProductDto>> {
    match crud::get_all::<Entity, _>(db).await {
        Ok(rows) => ApiResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            "Products list retrieved successfully.",
        ),
        Err(e) => {
            tracing::error!("Failed to list products: {e}");
            ApiResponse::fail("Failed to retrieve products.")
        }
    }
}

pub async fn get_product_by_id(db: &DatabaseConnection, id: i32) -> ApiResponse<ProductDto> {
    match crud::get_by_id::<Entity, _>(db, id).await {
        Ok(Some(row)) => ApiResponse::ok(row.into(), "Product retrieved successfully."),
        Ok(None) => ApiResponse::fail("Product not found."),
        Err(e) => {
            tracing::error!("Failed to get product {id}: {e}");
            ApiResponse::fail("Failed to retrieve product.")
        }
    }
}

pub async fn get_products_by_category_id(
    db: &DatabaseConnection,
    category_id: i32,
) -> ApiResponse<Vec<ProductDto>> {
    match repository::get_by_category_id(db, category_id).await {
        Ok(rows) => ApiResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            "Products by category retrieved successfully.",
        ),
        Err(e) => {
            tracing::error!("Failed to list products for category {category_id}: {e}");
            ApiResponse::fail("Failed to retrieve products by category.")
        }
    }
}

pub async fn create_product(db: &DatabaseConnection, dto: ProductDto) -> ApiResponse<ProductDto> {
    let model = repository::ActiveModel {
        category_id: Set(dto.category_id),
        product_name: Set(dto.product_name),
        unit: Set(dto.unit),
        selling_price: Set(dto.selling_price),
        description: Set(dto.description),
        quantity: Set(dto.quantity),
        ..Default::default()
    };
    match crud::insert(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Product created successfully."),
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            match PersistenceError::from(e) {
                PersistenceError::Constraint(msg) => {
                    ApiResponse::fail_with("Failed to create product.", vec![msg])
                }
                PersistenceError::Db(_) => ApiResponse::fail("Failed to create product."),
            }
        }
    }
}

pub async fn update_product(db: &DatabaseConnection, dto: ProductDto) -> ApiResponse<ProductDto> {
    let existing = match crud::get_by_id::<Entity, _>(db, dto.product_id).await {
        Ok(Some(row)) => row,
        Ok(None) => return ApiResponse::fail("Product not found."),
        Err(e) => {
            tracing::error!("Failed to get product {}: {e}", dto.product_id);
            return ApiResponse::fail("Failed to update product.");
        }
    };

    let mut model = existing.into_active_model();
    model.category_id = Set(dto.category_id);
    model.product_name = Set(dto.product_name);
    model.unit = Set(dto.unit);
    model.selling_price = Set(dto.selling_price);
    model.description = Set(dto.description);
    model.quantity = Set(dto.quantity);
    match crud::update(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Product updated successfully."),
        Err(e) => {
            tracing::error!("Failed to update product {}: {e}", dto.product_id);
            ApiResponse::fail("Failed to update product.")
        }
    }
}

pub async fn delete_product(db: &DatabaseConnection, id: i32) -> ApiResponse<bool> {
    match crud::delete_by_id::<Entity, _>(db, id).await {
        Ok(true) => ApiResponse::ok(true, "Product deleted successfully."),
        Ok(false) => ApiResponse::fail("Product not found."),
        Err(e) => {
            tracing::error!("Failed to delete product {id}: {e}");
            ApiResponse::fail("Failed to delete product.")
        }
    }
}
