pub mod contacts;
pub mod health;
pub mod students;

use crate::db::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route("/students-query", get(students::find_students_by_name))
        .route("/student_contacts", get(contacts::list_contacts))
        .route("/student_contacts/query", get(contacts::find_by_mobile))
        .route("/student_contacts/:id", get(contacts::get_contact))
        .route(
            "/students-with-contacts/:id",
            get(contacts::get_student_with_contact),
        )
        .layer(cors)
        .with_state(state)
}
