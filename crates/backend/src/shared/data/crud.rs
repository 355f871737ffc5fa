//! Entity-generic CRUD over any SeaORM entity.
//!
//! The per-entity repositories compose these helpers with a connection handle
//! instead of inheriting from a base type; anything that needs ordering or
//! eager loading (the order aggregate) adds its own queries on top.

use contracts::pagination::{PageRequest, PaginatedResult};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};

pub async fn get_all<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find().all(db).await
}

/// `None` when the id is absent; callers decide whether that is an error.
pub async fn get_by_id<E, C>(
    db: &C,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await
}

pub async fn insert<A, C>(db: &C, entity: A) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    entity.insert(db).await
}

/// Writes the `Set` fields of the given active model; the primary key must be
/// present. Callers merge desired fields onto a fetched row first.
pub async fn update<A, C>(db: &C, entity: A) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    entity.update(db).await
}

/// `false` when nothing was deleted because the id was absent.
pub async fn delete_by_id<E, C>(
    db: &C,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<bool, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Plain offset pagination with no ordering guarantee at this layer.
pub async fn get_page<E, C>(db: &C, page: PageRequest) -> Result<PaginatedResult<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    C: ConnectionTrait,
{
    let paginator = E::find().paginate(db, page.page_size());
    let total_count = paginator.num_items().await?;
    let items = paginator.fetch_page(page.page_number() - 1).await?;
    Ok(PaginatedResult::new(
        items,
        total_count,
        page.page_number(),
        page.page_size(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::repository as category;
    use crate::shared::data::db;
    use sea_orm::{Database, DatabaseConnection, Set};

    async fn test_db() -> DatabaseConnection {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        db::create_schema(&conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_insert_get_update_delete_roundtrip() {
        let conn = test_db().await;

        let created = insert(
            &conn,
            category::ActiveModel {
                category_name: Set("Vegetables".to_string()),
                description: Set(Some("Fresh produce".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(created.category_id > 0);

        let fetched = get_by_id::<category::Entity, _>(&conn, created.category_id)
            .await
            .unwrap()
            .expect("category should exist");
        assert_eq!(fetched.category_name, "Vegetables");

        let updated = update(
            &conn,
            category::ActiveModel {
                category_id: Set(created.category_id),
                category_name: Set("Root vegetables".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.category_name, "Root vegetables");

        assert!(delete_by_id::<category::Entity, _>(&conn, created.category_id)
            .await
            .unwrap());
        assert!(!delete_by_id::<category::Entity, _>(&conn, created.category_id)
            .await
            .unwrap());
        assert!(get_by_id::<category::Entity, _>(&conn, created.category_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_offset_pagination_window() {
        let conn = test_db().await;
        for i in 1..=7 {
            insert(
                &conn,
                category::ActiveModel {
                    category_name: Set(format!("Category {i}")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let page = get_page::<category::Entity, _>(&conn, PageRequest::new(2, 3))
            .await
            .unwrap();
        assert_eq!(page.total_count, 7);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page);
        assert!(page.has_previous_page);

        let last = get_page::<category::Entity, _>(&conn, PageRequest::new(3, 3))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next_page);
    }
}
