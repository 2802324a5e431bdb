use crate::{
    data::{Table, affected_any, succeeded},
    error::{MakeQuerySnafu, RosterResult},
};
use snafu::ResultExt;
use sqlx::{FromRow, Row, SqliteConnection, sqlite::SqliteRow};
use time::Date;

pub const TABLE_NAME: &str = "students";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<Date>,
}

impl Student {
    #[must_use]
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: Option<Date>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for Student {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("firstName")?,
            last_name: row.try_get("lastName")?,
            birthday: row.try_get("birthday")?,
        })
    }
}

#[derive(Debug)]
pub struct StudentsTable<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> StudentsTable<'c> {
    #[must_use]
    pub const fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_birthday(&mut self, birthday: Date) -> RosterResult<Vec<Student>> {
        debug!(%birthday, "Finding students by birthday");
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE birthday = ?")
            .bind(birthday)
            .fetch_all(&mut *self.conn)
            .await
            .context(MakeQuerySnafu)
    }
}

impl Table for StudentsTable<'_> {
    type Entity = Student;
    type Id = i32;

    fn table_name(&self) -> &'static str {
        TABLE_NAME
    }

    async fn create_table(&mut self) -> bool {
        let outcome = sqlx::query(
            "CREATE TABLE students (
                id INTEGER NOT NULL PRIMARY KEY,
                firstName TEXT NOT NULL,
                lastName TEXT NOT NULL,
                birthday DATE
            )",
        )
        .execute(&mut *self.conn)
        .await;
        succeeded(outcome, "create students table")
    }

    async fn drop_table(&mut self) -> bool {
        let outcome = sqlx::query("DROP TABLE students")
            .execute(&mut *self.conn)
            .await;
        succeeded(outcome, "drop students table")
    }

    async fn find_by_primary_key(&mut self, id: Self::Id) -> RosterResult<Option<Student>> {
        debug!(id, "Finding student by id");
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn find_all(&mut self) -> RosterResult<Vec<Student>> {
        debug!("Finding all students");
        sqlx::query_as::<_, Student>("SELECT * FROM students")
            .fetch_all(&mut *self.conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn save(&mut self, student: &Student) -> bool {
        let outcome = sqlx::query("INSERT INTO students VALUES (?, ?, ?, ?)")
            .bind(student.id)
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(student.birthday)
            .execute(&mut *self.conn)
            .await;
        succeeded(outcome, "insert student")
    }

    async fn update(&mut self, student: &Student) -> bool {
        let outcome = sqlx::query(
            "UPDATE students SET firstName = ?, lastName = ?, birthday = ? WHERE id = ?",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.birthday)
        .bind(student.id)
        .execute(&mut *self.conn)
        .await;
        affected_any(outcome, "update student")
    }

    async fn delete(&mut self, id: Self::Id) -> bool {
        let outcome = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await;
        affected_any(outcome, "delete student")
    }
}
