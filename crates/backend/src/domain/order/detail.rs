use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

/// One order line. `total` is a stored generated column
/// (`quantity * unit_price`); it is never written from here, only read back.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub detail_id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::repository::Entity",
        from = "Column::OrderId",
        to = "super::repository::Column::OrderId"
    )]
    Order,
    #[sea_orm(
        belongs_to = "crate::domain::product::repository::Entity",
        from = "Column::ProductId",
        to = "crate::domain::product::repository::Column::ProductId"
    )]
    Product,
}

impl Related<super::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<crate::domain::product::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn get_by_order_id<C: ConnectionTrait>(db: &C, order_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::OrderId.eq(order_id))
        .order_by_asc(Column::DetailId)
        .all(db)
        .await
}

/// Lines for a set of orders, each paired with its product, ordered by id
/// within an order.
pub async fn get_with_products_by_order_ids<C: ConnectionTrait>(
    db: &C,
    order_ids: &[i32],
) -> Result<Vec<(Model, Option<crate::domain::product::repository::Model>)>, DbErr> {
    if order_ids.is_empty() {
        return Ok(Vec::new());
    }
    Entity::find()
        .filter(Column::OrderId.is_in(order_ids.iter().copied()))
        .order_by_asc(Column::OrderId)
        .order_by_asc(Column::DetailId)
        .find_also_related(crate::domain::product::repository::Entity)
        .all(db)
        .await
}
