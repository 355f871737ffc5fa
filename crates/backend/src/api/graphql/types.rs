//! Output types of the query surface. Each wraps the corresponding wire DTO;
//! projection is plain GraphQL field selection over these shapes.

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use contracts::domain::account::{AccountDto, AccountSummary};
use contracts::domain::catalog::{CategoryDto, ImportedStockDto, ProductDto, ProductSummary};
use contracts::domain::order::{OrderDetailResponse, OrderResponse};
use contracts::pagination::PaginatedResult;
use rust_decimal::Decimal;

/// Account record without the stored password. Credentials are accepted on
/// the REST surface but never echoed through queries.
#[derive(Debug, Clone, SimpleObject)]
pub struct Account {
    pub account_id: i32,
    pub full_name: String,
    pub username: String,
    pub role: i32,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        Account {
            account_id: dto.account_id,
            full_name: dto.full_name,
            username: dto.username,
            role: dto.role,
            phone_number: dto.phone_number,
            email: dto.email,
            address: dto.address,
            created_date: dto.created_date,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct AccountRef {
    pub account_id: i32,
    pub full_name: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<AccountSummary> for AccountRef {
    fn from(s: AccountSummary) -> Self {
        AccountRef {
            account_id: s.account_id,
            full_name: s.full_name,
            username: s.username,
            phone_number: s.phone_number,
            email: s.email,
            address: s.address,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            category_id: dto.category_id,
            category_name: dto.category_name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Product {
    pub product_id: i32,
    pub category_id: Option<i32>,
    pub product_name: String,
    pub unit: String,
    pub selling_price: Decimal,
    pub description: Option<String>,
    pub quantity: i32,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            product_id: dto.product_id,
            category_id: dto.category_id,
            product_name: dto.product_name,
            unit: dto.unit,
            selling_price: dto.selling_price,
            description: dto.description,
            quantity: dto.quantity,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ProductRef {
    pub product_id: i32,
    pub product_name: String,
    pub unit: String,
    pub product_category: Option<Category>,
}

impl From<ProductSummary> for ProductRef {
    fn from(s: ProductSummary) -> Self {
        ProductRef {
            product_id: s.product_id,
            product_name: s.product_name,
            unit: s.unit,
            product_category: s.product_category.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ImportedStock {
    pub import_id: i32,
    pub product_id: i32,
    pub stock_before_update: i32,
    pub updated_stock_quantity: i32,
    pub stock_after_update: i32,
    pub notes: Option<String>,
    pub updated_by: i32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ImportedStockDto> for ImportedStock {
    fn from(dto: ImportedStockDto) -> Self {
        ImportedStock {
            import_id: dto.import_id,
            product_id: dto.product_id,
            stock_before_update: dto.stock_before_update,
            updated_stock_quantity: dto.updated_stock_quantity,
            stock_after_update: dto.stock_after_update,
            notes: dto.notes,
            updated_by: dto.updated_by,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct OrderDetail {
    pub detail_id: i32,
    pub product: Option<ProductRef>,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub total: Option<Decimal>,
}

impl From<OrderDetailResponse> for OrderDetail {
    fn from(r: OrderDetailResponse) -> Self {
        OrderDetail {
            detail_id: r.detail_id,
            product: r.product.map(Into::into),
            unit_price: r.unit_price,
            quantity: r.quantity,
            total: r.total,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Order {
    pub order_id: i32,
    pub customer: Option<AccountRef>,
    pub staff: Option<AccountRef>,
    pub order_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub order_details: Vec<OrderDetail>,
}

impl From<OrderResponse> for Order {
    fn from(r: OrderResponse) -> Self {
        Order {
            order_id: r.order_id,
            customer: r.customer.map(Into::into),
            staff: r.staff.map(Into::into),
            order_date: r.order_date,
            total_amount: r.total_amount,
            order_details: r.order_details.into_iter().map(Into::into).collect(),
        }
    }
}

/// Page of orders carrying the metadata computed by the shared pagination
/// result, field for field.
#[derive(Debug, Clone, SimpleObject)]
pub struct PaginatedOrders {
    pub items: Vec<Order>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<PaginatedResult<OrderResponse>> for PaginatedOrders {
    fn from(page: PaginatedResult<OrderResponse>) -> Self {
        PaginatedOrders {
            items: page.items.into_iter().map(Into::into).collect(),
            total_count: page.total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            has_next_page: page.has_next_page,
            has_previous_page: page.has_previous_page,
        }
    }
}
