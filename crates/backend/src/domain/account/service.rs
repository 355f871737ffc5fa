use chrono::Utc;
use contracts::api::ApiResponse;
use contracts::domain::account::AccountDto;
use sea_orm::{DatabaseConnection, IntoActiveModel, Set};

use super::repository::{self, Entity};
use crate::shared::data::crud;
use crate::shared::data::uow::PersistenceError;

pub async fn get_all_accounts(db: &DatabaseConnection) -> ApiResponse<Vec<AccountDto>> {
    match crud::get_all::<Entity, _>(db).await {
        Ok(rows) => ApiResponse::ok(
            rows.into_iter().map(Into::into).collect(),
            "Accounts list retrieved successfully.",
        ),
        Err(e) => {
            tracing::error!("Failed to list accounts: {e}");
            ApiResponse::fail("Failed to retrieve accounts.")
        }
    }
}

pub async fn get_account_by_id(db: &DatabaseConnection, id: i32) -> ApiResponse<AccountDto> {
    match crud::get_by_id::<Entity, _>(db, id).await {
        Ok(Some(row)) => ApiResponse::ok(row.into(), "Account retrieved successfully."),
        Ok(None) => ApiResponse::fail("Account not found."),
        Err(e) => {
            tracing::error!("Failed to get account {id}: {e}");
            ApiResponse::fail("Failed to retrieve account.")
        }
    }
}

pub async fn create_account(db: &DatabaseConnection, dto: AccountDto) -> ApiResponse<AccountDto> {
    let model = repository::ActiveModel {
        full_name: Set(dto.full_name),
        username: Set(dto.username),
        password: Set(dto.password),
        role: Set(dto.role),
        phone_number: Set(dto.phone_number),
        email: Set(dto.email),
        address: Set(dto.address),
        created_date: Set(Some(dto.created_date.unwrap_or_else(Utc::now))),
        status: Set(Some(dto.status.unwrap_or(true))),
        ..Default::default()
    };
    match crud::insert(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Account created successfully."),
        Err(e) => {
            tracing::error!("Failed to create account: {e}");
            match PersistenceError::from(e) {
                PersistenceError::Constraint(msg) => {
                    ApiResponse::fail_with("Failed to create account.", vec![msg])
                }
                PersistenceError::Db(_) => ApiResponse::fail("Failed to create account."),
            }
        }
    }
}

/// Merges only the contact fields onto the stored account; username, password
/// and role are not editable through this path.
pub async fn update_account(db: &DatabaseConnection, dto: AccountDto) -> ApiResponse<AccountDto> {
    let existing = match crud::get_by_id::<Entity, _>(db, dto.account_id).await {
        Ok(Some(row)) => row,
        Ok(None) => return ApiResponse::fail("Account not found."),
        Err(e) => {
            tracing::error!("Failed to get account {}: {e}", dto.account_id);
            return ApiResponse::fail("Failed to update account.");
        }
    };

    let mut model = existing.into_active_model();
    model.full_name = Set(dto.full_name);
    model.email = Set(dto.email);
    model.phone_number = Set(dto.phone_number);
    model.address = Set(dto.address);
    match crud::update(db, model).await {
        Ok(row) => ApiResponse::ok(row.into(), "Account updated successfully."),
        Err(e) => {
            tracing::error!("Failed to update account {}: {e}", dto.account_id);
            ApiResponse::fail("Failed to update account.")
        }
    }
}

pub async fn delete_account(db: &DatabaseConnection, id: i32) -> ApiResponse<bool> {
    match crud::delete_by_id::<Entity, _>(db, id).await {
        Ok(true) => ApiResponse::ok(true, "Account deleted successfully."),
        Ok(false) => ApiResponse::fail("Account not found."),
        Err(e) => {
            tracing::error!("Failed to delete account {id}: {e}");
            ApiResponse::fail("Failed to delete account.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use sea_orm::Database;

    fn dto(username: &str, role: i32) -> AccountDto {
        AccountDto {
            account_id: 0,
            full_name: "Test Account".to_string(),
            username: username.to_string(),
            password: "secret".to_string(),
            role,
            phone_number: None,
            email: None,
            address: None,
            created_date: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_role_survives_roundtrip_unchanged() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        db::create_schema(&conn).await.unwrap();

        // role values beyond one byte come back exactly as stored
        let created = create_account(&conn, dto("carol", 1000)).await;
        assert!(created.succeeded, "{}", created.message);
        let created = created.data.unwrap();
        assert_eq!(created.role, 1000);

        let fetched = get_account_by_id(&conn, created.account_id).await;
        assert_eq!(fetched.data.unwrap().role, 1000);
    }

    #[tokio::test]
    async fn test_duplicate_username_reports_constraint() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        db::create_schema(&conn).await.unwrap();

        assert!(create_account(&conn, dto("dave", 2)).await.succeeded);
        let second = create_account(&conn, dto("dave", 3)).await;
        assert!(!second.succeeded);
        assert!(!second.errors.unwrap().is_empty());
    }
}
