//! Database module: the storage contract and its SQLite implementation.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: sqlx-backed implementation of [`StudentStore`]

use std::future::Future;

use crate::error::RollcallError;

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{FieldPatch, Student, StudentInput};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, StudentStorage, spawn};

/// Persistence contract consumed by the HTTP handlers.
///
/// Methods return `impl Future + Send` so generic handlers stay `Send`
/// on the multi-threaded runtime. Write operations report rows affected;
/// zero means no row matched the id.
pub trait StudentStore: Send + Sync {
    /// Inserts one row and returns the generated id.
    fn create_student(
        &self,
        input: &StudentInput,
    ) -> impl Future<Output = Result<i64, RollcallError>> + Send;

    /// Fetches one row; zero matches surface as [`RollcallError::StudentNotFound`].
    fn student_by_id(&self, id: i64)
    -> impl Future<Output = Result<Student, RollcallError>> + Send;

    /// Fetches all rows; insertion order is not guaranteed.
    fn students(&self) -> impl Future<Output = Result<Vec<Student>, RollcallError>> + Send;

    /// Overwrites name/email/age for the row matching `id`.
    fn update_student_by_id(
        &self,
        id: i64,
        input: &StudentInput,
    ) -> impl Future<Output = Result<u64, RollcallError>> + Send;

    /// Overwrites exactly the one column named by the patch.
    fn update_student_field_by_id(
        &self,
        id: i64,
        patch: FieldPatch,
    ) -> impl Future<Output = Result<u64, RollcallError>> + Send;

    /// Removes the row permanently.
    fn delete_student_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<u64, RollcallError>> + Send;
}
