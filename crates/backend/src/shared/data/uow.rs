use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};
use thiserror::Error;

/// Failure of a store operation, with constraint violations separated from
/// plain I/O or driver errors so callers can phrase their messages.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

impl From<DbErr> for PersistenceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                PersistenceError::Constraint(msg)
            }
            _ => PersistenceError::Db(err),
        }
    }
}

/// One transaction scoped to one workflow call.
///
/// All repository writes of a workflow go through `conn()` and become durable
/// together on `commit()`. Dropping the unit of work without committing rolls
/// the transaction back, so an aborted workflow leaves no partial writes.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, PersistenceError> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), PersistenceError> {
        self.txn.commit().await?;
        Ok(())
    }
}
