use contracts::domain::catalog::ImportedStockDto;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock adjustment audit row. Append-only in practice: each import keeps the
/// before/after snapshot plus who made it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "imported_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub import_id: i32,
    pub product_id: i32,
    pub stock_before_update: i32,
    pub updated_stock_quantity: i32,
    pub stock_after_update: i32,
    pub notes: Option<String>,
    pub updated_by: i32,
    pub updated_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::product::repository::Entity",
        from = "Column::ProductId",
        to = "crate::domain::product::repository::Column::ProductId"
    )]
    Product,
    #[sea_orm(
        belongs_to = "crate::domain::account::repository::Entity",
        from = "Column::UpdatedBy",
        to = "crate::domain::account::repository::Column::AccountId"
    )]
    UpdatedByAccount,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ImportedStockDto {
    fn from(m: Model) -> Self {
        ImportedStockDto {
            import_id: m.import_id,
            product_id: m.product_id,
            stock_before_update: m.stock_before_update,
            updated_stock_quantity: m.updated_stock_quantity,
            stock_after_update: m.stock_after_update,
            notes: m.notes,
            updated_by: m.updated_by,
            updated_at: m.updated_at,
        }
    }
}
