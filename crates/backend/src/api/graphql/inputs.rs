//! Input types of the query surface. Filtering and sorting are explicit
//! enumerated choices mapped onto the repository search options, not a
//! reflective any-field middleware.

use async_graphql::{Enum, InputObject};
use chrono::{DateTime, Utc};
use contracts::domain::order::{OrderDetailDto, OrderHeaderDto};
use contracts::pagination::PageRequest;
use rust_decimal::Decimal;
use sea_orm::Order;

use crate::domain::account::repository as account;
use crate::domain::category::repository as category;
use crate::domain::product::repository as product;

#[derive(Debug, Clone, Copy, InputObject)]
pub struct PaginationInput {
    pub page_number: u64,
    pub page_size: u64,
}

impl From<PaginationInput> for PageRequest {
    fn from(input: PaginationInput) -> Self {
        PageRequest::new(input.page_number, input.page_size)
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct OrderInput {
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
}

impl OrderInput {
    pub fn into_header(self, order_id: i32) -> OrderHeaderDto {
        OrderHeaderDto {
            order_id,
            customer_id: self.customer_id,
            staff_id: self.staff_id,
            order_date: self.order_date,
            total_amount: self.total_amount,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct OrderDetailInput {
    pub detail_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Option<Decimal>,
}

impl From<OrderDetailInput> for OrderDetailDto {
    fn from(input: OrderDetailInput) -> Self {
        OrderDetailDto {
            detail_id: input.detail_id.unwrap_or_default(),
            order_id: 0,
            product_id: input.product_id,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total: input.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct AccountFilterInput {
    pub role: Option<i32>,
    pub status: Option<bool>,
    pub username: Option<String>,
}

impl From<AccountFilterInput> for account::AccountFilter {
    fn from(input: AccountFilterInput) -> Self {
        account::AccountFilter {
            role: input.role,
            status: input.status,
            username: input.username,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum AccountSortField {
    AccountId,
    FullName,
    Username,
    Role,
    CreatedDate,
}

#[derive(Debug, Clone, Copy, InputObject)]
pub struct AccountSortInput {
    pub field: AccountSortField,
    pub direction: SortDirection,
}

impl AccountSortInput {
    pub fn to_query(self) -> (account::AccountSortField, Order) {
        let field = match self.field {
            AccountSortField::AccountId => account::AccountSortField::AccountId,
            AccountSortField::FullName => account::AccountSortField::FullName,
            AccountSortField::Username => account::AccountSortField::Username,
            AccountSortField::Role => account::AccountSortField::Role,
            AccountSortField::CreatedDate => account::AccountSortField::CreatedDate,
        };
        (field, self.direction.into())
    }
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct ProductFilterInput {
    pub category_id: Option<i32>,
    pub in_stock: Option<bool>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl From<ProductFilterInput> for product::ProductFilter {
    fn from(input: ProductFilterInput) -> Self {
        product::ProductFilter {
            category_id: input.category_id,
            in_stock: input.in_stock.unwrap_or(false),
            min_price: input.min_price,
            max_price: input.max_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ProductSortField {
    ProductId,
    ProductName,
    SellingPrice,
    Quantity,
}

#[derive(Debug, Clone, Copy, InputObject)]
pub struct ProductSortInput {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSortInput {
    pub fn to_query(self) -> (product::ProductSortField, Order) {
        let field = match self.field {
            ProductSortField::ProductId => product::ProductSortField::ProductId,
            ProductSortField::ProductName => product::ProductSortField::ProductName,
            ProductSortField::SellingPrice => product::ProductSortField::SellingPrice,
            ProductSortField::Quantity => product::ProductSortField::Quantity,
        };
        (field, self.direction.into())
    }
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct CategoryFilterInput {
    pub category_name: Option<String>,
}

impl From<CategoryFilterInput> for category::CategoryFilter {
    fn from(input: CategoryFilterInput) -> Self {
        category::CategoryFilter {
            category_name: input.category_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CategorySortField {
    CategoryId,
    CategoryName,
}

#[derive(Debug, Clone, Copy, InputObject)]
pub struct CategorySortInput {
    pub field: CategorySortField,
    pub direction: SortDirection,
}

impl CategorySortInput {
    pub fn to_query(self) -> (category::CategorySortField, Order) {
        let field = match self.field {
            CategorySortField::CategoryId => category::CategorySortField::CategoryId,
            CategorySortField::CategoryName => category::CategorySortField::CategoryName,
        };
        (field, self.direction.into())
    }
}
