use crate::error::RosterResult;
use sqlx::sqlite::SqliteQueryResult;

pub mod student;

/// One database table mapped onto an entity type.
///
/// DDL and writes report failure as `false` and never surface the cause. Reads surface failures as errors which callers
/// are expected to treat as fatal.
#[allow(async_fn_in_trait)]
pub trait Table {
    type Entity;
    type Id;

    fn table_name(&self) -> &'static str;

    async fn create_table(&mut self) -> bool;
    async fn drop_table(&mut self) -> bool;
    async fn find_by_primary_key(&mut self, id: Self::Id) -> RosterResult<Option<Self::Entity>>;
    async fn find_all(&mut self) -> RosterResult<Vec<Self::Entity>>;
    async fn save(&mut self, entity: &Self::Entity) -> bool;
    async fn update(&mut self, entity: &Self::Entity) -> bool;
    async fn delete(&mut self, id: Self::Id) -> bool;
}

/// `true` if the statement ran at all.
pub(crate) fn succeeded(outcome: Result<SqliteQueryResult, sqlx::Error>, operation: &str) -> bool {
    match outcome {
        Ok(_) => {
            debug!(operation, "Statement ran");
            true
        }
        Err(e) => {
            warn!(?e, operation, "Swallowing failed statement");
            false
        }
    }
}

/// `true` if the statement ran and touched at least one row.
pub(crate) fn affected_any(
    outcome: Result<SqliteQueryResult, sqlx::Error>,
    operation: &str,
) -> bool {
    match outcome {
        Ok(result) => {
            debug!(operation, rows = result.rows_affected(), "Statement affected rows");
            result.rows_affected() > 0
        }
        Err(e) => {
            warn!(?e, operation, "Swallowing failed statement");
            false
        }
    }
}
