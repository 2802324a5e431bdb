use crate::{
    config::RuntimeConfiguration,
    data::student::StudentsTable,
    error::{CloseDatabaseSnafu, OpenDatabaseSnafu, RosterResult},
};
use snafu::ResultExt;
use sqlx::{Connection, SqliteConnection};

/// Owns the one live connection the binary works through, and lends it out to tables.
#[derive(Debug)]
pub struct RosterState {
    conn: SqliteConnection,
}

impl RosterState {
    pub async fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let conn = SqliteConnection::connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        Ok(Self { conn })
    }

    #[must_use]
    pub const fn students(&mut self) -> StudentsTable<'_> {
        StudentsTable::new(&mut self.conn)
    }

    pub async fn sensible_shutdown(self) -> RosterResult<()> {
        self.conn.close().await.context(CloseDatabaseSnafu)
    }
}
