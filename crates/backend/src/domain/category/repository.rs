use contracts::domain::catalog::CategoryDto;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Order, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::product::repository::Entity")]
    Products,
}

impl Related<crate::domain::product::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CategoryDto {
    fn from(m: Model) -> Self {
        CategoryDto {
            category_id: m.category_id,
            category_name: m.category_name,
            description: m.description,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CategoryFilter {
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySortField {
    CategoryId,
    CategoryName,
}

impl CategorySortField {
    fn column(self) -> Column {
        match self {
            CategorySortField::CategoryId => Column::CategoryId,
            CategorySortField::CategoryName => Column::CategoryName,
        }
    }
}

pub async fn search<C: ConnectionTrait>(
    db: &C,
    filter: CategoryFilter,
    sort: Option<(CategorySortField, Order)>,
) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find();
    if let Some(name) = filter.category_name {
        query = query.filter(Column::CategoryName.eq(name));
    }
    let (field, order) = sort.unwrap_or((CategorySortField::CategoryId, Order::Asc));
    query.order_by(field.column(), order).all(db).await
}
