use contracts::domain::catalog::ProductDto;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Order, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    pub category_id: Option<i32>,
    pub product_name: String,
    pub unit: String,
    pub selling_price: Decimal,
    pub description: Option<String>,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::category::repository::Entity",
        from = "Column::CategoryId",
        to = "crate::domain::category::repository::Column::CategoryId"
    )]
    Category,
}

impl Related<crate::domain::category::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductDto {
    fn from(m: Model) -> Self {
        ProductDto {
            product_id: m.product_id,
            category_id: m.category_id,
            product_name: m.product_name,
            unit: m.unit,
            selling_price: m.selling_price,
            description: m.description,
            quantity: m.quantity,
        }
    }
}

pub async fn get_by_category_id<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .all(db)
        .await
}

#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
    pub in_stock: bool,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    ProductId,
    ProductName,
    SellingPrice,
    Quantity,
}

impl ProductSortField {
    fn column(self) -> Column {
        match self {
            ProductSortField::ProductId => Column::ProductId,
            ProductSortField::ProductName => Column::ProductName,
            ProductSortField::SellingPrice => Column::SellingPrice,
            ProductSortField::Quantity => Column::Quantity,
        }
    }
}

pub async fn search<C: ConnectionTrait>(
    db: &C,
    filter: ProductFilter,
    sort: Option<(ProductSortField, Order)>,
) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find();
    if let Some(category_id) = filter.category_id {
        query = query.filter(Column::CategoryId.eq(category_id));
    }
    if filter.in_stock {
        query = query.filter(Column::Quantity.gt(0));
    }
    if let Some(min) = filter.min_price {
        query = query.filter(Column::SellingPrice.gte(min));
    }
    if let Some(max) = filter.max_price {
        query = query.filter(Column::SellingPrice.lte(max));
    }
    let (field, order) = sort.unwrap_or((ProductSortField::ProductId, Order::Asc));
    query.order_by(field.column(), order).all(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{crud, db};
    use sea_orm::{Database, DatabaseConnection, Set};

    async fn test_db() -> DatabaseConnection {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        db::create_schema(&conn).await.unwrap();
        conn
    }

    async fn seed(db: &DatabaseConnection, name: &str, price: Decimal, quantity: i32) {
        crud::insert(
            db,
            ActiveModel {
                product_name: Set(name.to_string()),
                unit: Set("kg".to_string()),
                selling_price: Set(price),
                quantity: Set(quantity),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_search_filters_and_sorts() {
        let conn = test_db().await;
        seed(&conn, "Carrots", Decimal::new(300, 2), 10).await;
        seed(&conn, "Apples", Decimal::new(750, 2), 0).await;
        seed(&conn, "Berries", Decimal::new(1500, 2), 5).await;

        let in_stock = search(
            &conn,
            ProductFilter {
                in_stock: true,
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        assert_eq!(in_stock.len(), 2);
        assert!(in_stock.iter().all(|p| p.quantity > 0));

        let mid_priced = search(
            &conn,
            ProductFilter {
                min_price: Some(Decimal::new(500, 2)),
                max_price: Some(Decimal::new(1000, 2)),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        assert_eq!(mid_priced.len(), 1);
        assert_eq!(mid_priced[0].product_name, "Apples");

        let by_price_desc = search(
            &conn,
            ProductFilter::default(),
            Some((ProductSortField::SellingPrice, Order::Desc)),
        )
        .await
        .unwrap();
        let names: Vec<_> = by_price_desc.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, ["Berries", "Apples", "Carrots"]);
    }
}
