use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use contracts::domain::account::AccountDto;
use contracts::domain::catalog::{CategoryDto, ProductDto};
use sea_orm::DatabaseConnection;

use super::inputs::{
    AccountFilterInput, AccountSortInput, CategoryFilterInput, CategorySortInput, PaginationInput,
    ProductFilterInput, ProductSortInput,
};
use super::types::{Account, Category, Order, PaginatedOrders, Product};
use crate::domain::account::repository as account_repo;
use crate::domain::category::repository as category_repo;
use crate::domain::order::service as order_service;
use crate::domain::product::repository as product_repo;
use crate::domain::product::service as product_service;

pub struct QueryRoot;

/// Read side of the schema. Order queries go through the workflow service and
/// collapse failed envelopes to `null` or an empty list; catalog and account
/// queries run enumerated repository searches.
#[Object]
impl QueryRoot {
    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = order_service::get_all_orders(db).await;
        Ok(collect(response.data))
    }

    async fn orders_paginated(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<PaginatedOrders> {
        let db = ctx.data::<DatabaseConnection>()?;
        let page = pagination.map(Into::into).unwrap_or_default();
        let result = order_service::get_orders_page(db, page)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(result.into())
    }

    async fn order_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = order_service::get_order_by_id(db, id).await;
        Ok(response.data.map(Into::into))
    }

    async fn latest_order(&self, ctx: &Context<'_>) -> Result<Option<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = order_service::get_latest_order(db).await;
        Ok(response.data.map(Into::into))
    }

    async fn orders_by_customer(
        &self,
        ctx: &Context<'_>,
        customer_id: i32,
    ) -> Result<Vec<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = order_service::get_orders_by_customer(db, customer_id).await;
        Ok(collect(response.data))
    }

    async fn orders_by_date_range(
        &self,
        ctx: &Context<'_>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = order_service::get_orders_by_date_range(db, start_date, end_date).await;
        Ok(collect(response.data))
    }

    async fn accounts(
        &self,
        ctx: &Context<'_>,
        filter: Option<AccountFilterInput>,
        sort: Option<AccountSortInput>,
    ) -> Result<Vec<Account>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let models = account_repo::search(
            db,
            filter.unwrap_or_default().into(),
            sort.map(AccountSortInput::to_query),
        )
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(AccountDto::from)
            .map(Account::from)
            .collect())
    }

    async fn account_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Account>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = crate::domain::account::service::get_account_by_id(db, id).await;
        Ok(response.data.map(Into::into))
    }

    async fn account_by_username(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> Result<Option<Account>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = account_repo::AccountFilter {
            username: Some(username),
            ..Default::default()
        };
        let models = account_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .next()
            .map(AccountDto::from)
            .map(Account::from))
    }

    async fn accounts_by_role(&self, ctx: &Context<'_>, role: i32) -> Result<Vec<Account>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = account_repo::AccountFilter {
            role: Some(role),
            ..Default::default()
        };
        let models = account_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(AccountDto::from)
            .map(Account::from)
            .collect())
    }

    async fn active_accounts(&self, ctx: &Context<'_>) -> Result<Vec<Account>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = account_repo::AccountFilter {
            status: Some(true),
            ..Default::default()
        };
        let models = account_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(AccountDto::from)
            .map(Account::from)
            .collect())
    }

    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductFilterInput>,
        sort: Option<ProductSortInput>,
    ) -> Result<Vec<Product>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let models = product_repo::search(
            db,
            filter.unwrap_or_default().into(),
            sort.map(ProductSortInput::to_query),
        )
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(ProductDto::from)
            .map(Product::from)
            .collect())
    }

    async fn product_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Product>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = product_service::get_product_by_id(db, id).await;
        Ok(response.data.map(Into::into))
    }

    async fn products_by_category(
        &self,
        ctx: &Context<'_>,
        category_id: i32,
    ) -> Result<Vec<Product>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = product_service::get_products_by_category_id(db, category_id).await;
        Ok(collect(response.data))
    }

    async fn products_in_stock(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = product_repo::ProductFilter {
            in_stock: true,
            ..Default::default()
        };
        let models = product_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(ProductDto::from)
            .map(Product::from)
            .collect())
    }

    async fn products_by_price_range(
        &self,
        ctx: &Context<'_>,
        min_price: rust_decimal::Decimal,
        max_price: rust_decimal::Decimal,
    ) -> Result<Vec<Product>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = product_repo::ProductFilter {
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..Default::default()
        };
        let models = product_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(ProductDto::from)
            .map(Product::from)
            .collect())
    }

    async fn categories(
        &self,
        ctx: &Context<'_>,
        filter: Option<CategoryFilterInput>,
        sort: Option<CategorySortInput>,
    ) -> Result<Vec<Category>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let models = category_repo::search(
            db,
            filter.unwrap_or_default().into(),
            sort.map(CategorySortInput::to_query),
        )
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .map(CategoryDto::from)
            .map(Category::from)
            .collect())
    }

    async fn category_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Category>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = crate::domain::category::service::get_category_by_id(db, id).await;
        Ok(response.data.map(Into::into))
    }

    async fn category_by_name(&self, ctx: &Context<'_>, name: String) -> Result<Option<Category>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let filter = category_repo::CategoryFilter {
            category_name: Some(name),
        };
        let models = category_repo::search(db, filter, None)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(models
            .into_iter()
            .next()
            .map(CategoryDto::from)
            .map(Category::from))
    }
}

fn collect<D, T: From<D>>(data: Option<Vec<D>>) -> Vec<T> {
    data.unwrap_or_default().into_iter().map(Into::into).collect()
}
