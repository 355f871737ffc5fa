use async_graphql_axum::GraphQL;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::api::graphql::AppSchema;
use crate::api::handlers;

/// All application routes: the REST surface plus the GraphQL endpoint.
pub fn configure_routes(schema: AppSchema) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Order endpoints
        .route(
            "/api/Order/GetAllOrders",
            get(handlers::order::get_all_orders),
        )
        .route(
            "/api/Order/GetOrderById",
            get(handlers::order::get_order_by_id),
        )
        .route("/api/Order/CreateOrder", post(handlers::order::create_order))
        .route("/api/Order/UpdateOrder", put(handlers::order::update_order))
        .route(
            "/api/Order/DeleteOrder",
            delete(handlers::order::delete_order),
        )
        .route(
            "/api/Order/GetOrdersPaginated",
            get(handlers::order::get_orders_paginated),
        )
        .route(
            "/api/Order/GetLatestOrder",
            get(handlers::order::get_latest_order),
        )
        // Account endpoints
        .route(
            "/api/Account/GetAllAccounts",
            get(handlers::account::get_all_accounts),
        )
        .route(
            "/api/Account/GetAccountById",
            get(handlers::account::get_account_by_id),
        )
        .route(
            "/api/Account/CreateAccount",
            post(handlers::account::create_account),
        )
        .route(
            "/api/Account/UpdateAccount",
            put(handlers::account::update_account),
        )
        .route(
            "/api/Account/DeleteAccount",
            delete(handlers::account::delete_account),
        )
        // Category endpoints
        .route(
            "/api/Category/GetAllCategories",
            get(handlers::category::get_all_categories),
        )
        .route(
            "/api/Category/GetCategoryById",
            get(handlers::category::get_category_by_id),
        )
        .route(
            "/api/Category/CreateCategory",
            post(handlers::category::create_category),
        )
        .route(
            "/api/Category/UpdateCategory",
            put(handlers::category::update_category),
        )
        .route(
            "/api/Category/DeleteCategory",
            delete(handlers::category::delete_category),
        )
        // Product endpoints
        .route(
            "/api/Product/GetAllProducts",
            get(handlers::product::get_all_products),
        )
        .route(
            "/api/Product/GetProductById",
            get(handlers::product::get_product_by_id),
        )
        .route(
            "/api/Product/GetProductsByCategoryId",
            get(handlers::product::get_products_by_category_id),
        )
        .route(
            "/api/Product/CreateProduct",
            post(handlers::product::create_product),
        )
        .route(
            "/api/Product/UpdateProduct",
            put(handlers::product::update_product),
        )
        .route(
            "/api/Product/DeleteProduct",
            delete(handlers::product::delete_product),
        )
        // Imported stock endpoints
        .route(
            "/api/ImportedStock/GetAllImportedStock",
            get(handlers::imported_stock::get_all_imported_stock),
        )
        .route(
            "/api/ImportedStock/GetImportedStockById",
            get(handlers::imported_stock::get_imported_stock_by_id),
        )
        .route(
            "/api/ImportedStock/CreateImportedStock",
            post(handlers::imported_stock::create_imported_stock),
        )
        .route(
            "/api/ImportedStock/UpdateImportedStock",
            put(handlers::imported_stock::update_imported_stock),
        )
        .route(
            "/api/ImportedStock/DeleteImportedStock",
            delete(handlers::imported_stock::delete_imported_stock),
        )
        // Both surfaces share one service layer underneath
        .route_service("/graphql", GraphQL::new(schema))
}
