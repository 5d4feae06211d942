use rollcall::db::{FieldPatch, StudentInput, StudentStore};
use rollcall::error::RollcallError;
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

async fn spawn_storage() -> (rollcall::db::StudentStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "rollcall-storage-{}-{}-{}.sqlite",
        std::process::id(),
        nanos,
        DB_SEQ.fetch_add(1, Ordering::SeqCst)
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = rollcall::db::spawn(&database_url)
        .await
        .expect("failed to open test database");
    (storage, temp_path)
}

fn ann() -> StudentInput {
    StudentInput {
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        age: 30,
    }
}

#[tokio::test]
async fn create_assigns_ids_exactly_once_and_in_order() {
    let (storage, db) = spawn_storage().await;

    let first = storage.create_student(&ann()).await.unwrap();
    let second = storage.create_student(&ann()).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn missing_row_surfaces_as_domain_not_found() {
    let (storage, db) = spawn_storage().await;

    let err = storage.student_by_id(7).await.unwrap_err();
    assert!(matches!(err, RollcallError::StudentNotFound));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn schema_init_is_idempotent_across_reopen() {
    let (storage, db) = spawn_storage().await;

    let id = storage.create_student(&ann()).await.unwrap();
    storage.init_schema().await.unwrap();

    // CREATE TABLE IF NOT EXISTS must not clobber existing rows.
    let reopened = rollcall::db::spawn(&format!("sqlite:{}", db.display()))
        .await
        .unwrap();
    let student = reopened.student_by_id(id).await.unwrap();
    assert_eq!(student.name, "Ann");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn full_update_reports_rows_affected() {
    let (storage, db) = spawn_storage().await;

    let id = storage.create_student(&ann()).await.unwrap();
    let replacement = StudentInput {
        name: "Zed".to_string(),
        email: "z@x.com".to_string(),
        age: 41,
    };

    assert_eq!(storage.update_student_by_id(id, &replacement).await.unwrap(), 1);
    assert_eq!(storage.update_student_by_id(99, &replacement).await.unwrap(), 0);

    let student = storage.student_by_id(id).await.unwrap();
    assert_eq!(student.name, "Zed");
    assert_eq!(student.email, "z@x.com");
    assert_eq!(student.age, 41);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn field_patch_touches_only_its_column() {
    let (storage, db) = spawn_storage().await;

    let id = storage.create_student(&ann()).await.unwrap();
    let rows = storage
        .update_student_field_by_id(id, FieldPatch::Age(31))
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let student = storage.student_by_id(id).await.unwrap();
    assert_eq!(student.age, 31);
    assert_eq!(student.name, "Ann");
    assert_eq!(student.email, "a@x.com");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn field_patch_on_missing_row_affects_nothing() {
    let (storage, db) = spawn_storage().await;

    let rows = storage
        .update_student_field_by_id(5, FieldPatch::Name("Zed".to_string()))
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn delete_removes_the_row_and_never_reuses_its_id() {
    let (storage, db) = spawn_storage().await;

    let first = storage.create_student(&ann()).await.unwrap();
    assert_eq!(storage.delete_student_by_id(first).await.unwrap(), 1);
    assert_eq!(storage.delete_student_by_id(first).await.unwrap(), 0);
    assert!(matches!(
        storage.student_by_id(first).await.unwrap_err(),
        RollcallError::StudentNotFound
    ));

    // AUTOINCREMENT keeps ids strictly increasing even after a delete.
    let second = storage.create_student(&ann()).await.unwrap();
    assert!(second > first);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn list_returns_all_rows() {
    let (storage, db) = spawn_storage().await;

    storage.create_student(&ann()).await.unwrap();
    let ben = StudentInput {
        name: "Ben".to_string(),
        email: "b@x.com".to_string(),
        age: 25,
    };
    storage.create_student(&ben).await.unwrap();

    let students = storage.students().await.unwrap();
    assert_eq!(students.len(), 2);

    let _ = fs::remove_file(&db);
}
