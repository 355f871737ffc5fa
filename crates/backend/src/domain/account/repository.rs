use contracts::domain::account::{AccountDto, AccountSummary};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Order, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub account_id: i32,
    pub full_name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub role: i32,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_date: Option<ChronoDateTimeUtc>,
    pub status: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AccountDto {
    fn from(m: Model) -> Self {
        AccountDto {
            account_id: m.account_id,
            full_name: m.full_name,
            username: m.username,
            password: m.password,
            role: m.role,
            phone_number: m.phone_number,
            email: m.email,
            address: m.address,
            created_date: m.created_date,
            status: m.status,
        }
    }
}

impl From<Model> for AccountSummary {
    fn from(m: Model) -> Self {
        AccountSummary {
            account_id: m.account_id,
            full_name: m.full_name,
            username: m.username,
            phone_number: m.phone_number,
            email: m.email,
            address: m.address,
        }
    }
}

/// Explicit search options for the query surface. Each filter field is an
/// enumerated choice, there is no reflective field matching.
#[derive(Debug, Default, Clone)]
pub struct AccountFilter {
    pub role: Option<i32>,
    pub status: Option<bool>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSortField {
    AccountId,
    FullName,
    Username,
    Role,
    CreatedDate,
}

impl AccountSortField {
    fn column(self) -> Column {
        match self {
            AccountSortField::AccountId => Column::AccountId,
            AccountSortField::FullName => Column::FullName,
            AccountSortField::Username => Column::Username,
            AccountSortField::Role => Column::Role,
            AccountSortField::CreatedDate => Column::CreatedDate,
        }
    }
}

pub async fn search<C: ConnectionTrait>(
    db: &C,
    filter: AccountFilter,
    sort: Option<(AccountSortField, Order)>,
) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find();
    if let Some(role) = filter.role {
        query = query.filter(Column::Role.eq(role));
    }
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status));
    }
    if let Some(username) = filter.username {
        query = query.filter(Column::Username.eq(username));
    }
    let (field, order) = sort.unwrap_or((AccountSortField::AccountId, Order::Asc));
    query.order_by(field.column(), order).all(db).await
}
