use std::collections::HashMap;

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select};
use serde::{Deserialize, Serialize};

use super::detail;
use crate::domain::account::repository as account;
use crate::domain::category::repository as category;
use crate::domain::product::repository as product;

/// Order header. `total_amount` is stored exactly as supplied by the caller;
/// it is not reconciled against the detail totals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i32,
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub order_date: ChronoDateTimeUtc,
    pub total_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::account::repository::Entity",
        from = "Column::CustomerId",
        to = "crate::domain::account::repository::Column::AccountId"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "crate::domain::account::repository::Entity",
        from = "Column::StaffId",
        to = "crate::domain::account::repository::Column::AccountId"
    )]
    Staff,
    #[sea_orm(has_many = "super::detail::Entity")]
    Details,
}

impl Related<super::detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fully materialized order: header, both account references, and every line
/// with its product and the product's category.
#[derive(Debug, Clone)]
pub struct OrderAggregate {
    pub order: Model,
    pub customer: Option<account::Model>,
    pub staff: Option<account::Model>,
    pub details: Vec<DetailLine>,
}

#[derive(Debug, Clone)]
pub struct DetailLine {
    pub detail: detail::Model,
    pub product: Option<(product::Model, Option<category::Model>)>,
}

/// Recency ordering shared by `get_latest` and pagination: newest order date
/// first, ties broken by the monotonic id so the order is deterministic.
fn recency_ordered() -> Select<Entity> {
    Entity::find()
        .order_by_desc(Column::OrderDate)
        .order_by_desc(Column::OrderId)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn get_all_recent_first<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    recency_ordered().all(db).await
}

pub async fn get_latest<C: ConnectionTrait>(db: &C) -> Result<Option<Model>, DbErr> {
    recency_ordered().one(db).await
}

pub async fn get_by_customer<C: ConnectionTrait>(
    db: &C,
    customer_id: i32,
) -> Result<Vec<Model>, DbErr> {
    recency_ordered()
        .filter(Column::CustomerId.eq(customer_id))
        .all(db)
        .await
}

/// Orders whose `order_date` falls in the inclusive `[start, end]` range.
pub async fn get_in_date_range<C: ConnectionTrait>(
    db: &C,
    start: ChronoDateTimeUtc,
    end: ChronoDateTimeUtc,
) -> Result<Vec<Model>, DbErr> {
    recency_ordered()
        .filter(Column::OrderDate.gte(start))
        .filter(Column::OrderDate.lte(end))
        .all(db)
        .await
}

/// One pagination window, recency-ordered before the offset is applied.
pub async fn get_window<C: ConnectionTrait>(
    db: &C,
    skip: u64,
    take: u64,
) -> Result<Vec<Model>, DbErr> {
    recency_ordered().offset(skip).limit(take).all(db).await
}

/// Attaches customers, staff, lines, products and categories to the given
/// headers in three batched queries, preserving the input order.
pub async fn load_aggregates<C: ConnectionTrait>(
    db: &C,
    orders: Vec<Model>,
) -> Result<Vec<OrderAggregate>, DbErr> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let mut account_ids: Vec<i32> = orders
        .iter()
        .flat_map(|o| [o.customer_id, o.staff_id])
        .flatten()
        .collect();
    account_ids.sort_unstable();
    account_ids.dedup();

    let accounts: HashMap<i32, account::Model> = if account_ids.is_empty() {
        HashMap::new()
    } else {
        account::Entity::find()
            .filter(account::Column::AccountId.is_in(account_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|a| (a.account_id, a))
            .collect()
    };

    let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
    let details = detail::get_with_products_by_order_ids(db, &order_ids).await?;

    let mut category_ids: Vec<i32> = details
        .iter()
        .filter_map(|(_, p)| p.as_ref().and_then(|p| p.category_id))
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let categories: HashMap<i32, category::Model> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        category::Entity::find()
            .filter(category::Column::CategoryId.is_in(category_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.category_id, c))
            .collect()
    };

    let mut lines_by_order: HashMap<i32, Vec<DetailLine>> = HashMap::new();
    for (detail, product) in details {
        let product = product.map(|p| {
            let cat = p.category_id.and_then(|id| categories.get(&id).cloned());
            (p, cat)
        });
        lines_by_order
            .entry(detail.order_id)
            .or_default()
            .push(DetailLine { detail, product });
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let customer = order.customer_id.and_then(|id| accounts.get(&id).cloned());
            let staff = order.staff_id.and_then(|id| accounts.get(&id).cloned());
            let details = lines_by_order.remove(&order.order_id).unwrap_or_default();
            OrderAggregate {
                order,
                customer,
                staff,
                details,
            }
        })
        .collect())
}

pub async fn get_aggregate_by_id<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
) -> Result<Option<OrderAggregate>, DbErr> {
    let order = match Entity::find_by_id(order_id).one(db).await? {
        Some(order) => order,
        None => return Ok(None),
    };
    Ok(load_aggregates(db, vec![order]).await?.into_iter().next())
}
