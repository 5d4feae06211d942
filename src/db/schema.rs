//! SQL DDL for initializing the student storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, assigned exactly once at insert
/// - `name` / `email` TEXT, `age` INTEGER, written only through the service
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    age INTEGER
);
"#;
