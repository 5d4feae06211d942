//! Route table and shared request state.

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::StudentStore;
use crate::handlers::students;

/// Shared state handed to every handler. Holds the storage behind the
/// [`StudentStore`] contract; cloning is cheap (the sqlx pool is an `Arc`
/// internally).
#[derive(Clone)]
pub struct RollcallState<S> {
    pub storage: S,
}

impl<S: StudentStore> RollcallState<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

/// Build the full route table over any [`StudentStore`] implementation.
pub fn rollcall_router<S>(state: RollcallState<S>) -> Router
where
    S: StudentStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/students",
            post(students::create_student::<S>).get(students::list_students::<S>),
        )
        .route(
            "/api/students/{id}",
            get(students::get_student::<S>)
                .put(students::update_student::<S>)
                .patch(students::update_student_field::<S>)
                .delete(students::delete_student::<S>),
        )
        .with_state(state)
}
