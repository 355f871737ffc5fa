use async_graphql::{EmptySubscription, Schema};
use sea_orm::DatabaseConnection;

pub mod inputs;
pub mod mutation;
pub mod query;
pub mod types;

use mutation::MutationRoot;
use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(db: DatabaseConnection) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}
