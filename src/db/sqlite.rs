use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::StudentStore;
use crate::db::models::{FieldPatch, Student, StudentInput};
use crate::db::schema::SQLITE_INIT;
use crate::error::RollcallError;

pub type SqlitePool = Pool<Sqlite>;

/// Open (or create) the backing database file, build the pool, and ensure
/// the schema exists.
pub async fn spawn(database_url: &str) -> Result<StudentStorage, RollcallError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let storage = StudentStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct StudentStorage {
    pool: SqlitePool,
}

impl StudentStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RollcallError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

impl StudentStore for StudentStorage {
    async fn create_student(&self, input: &StudentInput) -> Result<i64, RollcallError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn student_by_id(&self, id: i64) -> Result<Student, RollcallError> {
        let student: Option<Student> =
            sqlx::query_as("SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        student.ok_or(RollcallError::StudentNotFound)
    }

    async fn students(&self) -> Result<Vec<Student>, RollcallError> {
        let students = sqlx::query_as("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    async fn update_student_by_id(
        &self,
        id: i64,
        input: &StudentInput,
    ) -> Result<u64, RollcallError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_student_field_by_id(
        &self,
        id: i64,
        patch: FieldPatch,
    ) -> Result<u64, RollcallError> {
        // The column name comes from the closed FieldPatch set, never from
        // request text.
        let sql = format!("UPDATE students SET {} = ? WHERE id = ?", patch.column());
        let query = sqlx::query(&sql);
        let query = match patch {
            FieldPatch::Name(value) | FieldPatch::Email(value) => query.bind(value),
            FieldPatch::Age(value) => query.bind(value),
        };
        let result = query.bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_student_by_id(&self, id: i64) -> Result<u64, RollcallError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
