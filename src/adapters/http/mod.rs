mod error;
mod handlers;
mod middleware;

pub use error::ErrorBody;

use crate::domain::ports::CourseRepository;
use crate::domain::services::{AddCourseService, CourseQueryService};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_course: AddCourseService,
    pub queries: CourseQueryService,
}

impl AppState {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self {
            add_course: AddCourseService::new(repository.clone()),
            queries: CourseQueryService::new(repository),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/courses",
            get(handlers::list_courses_handler).post(handlers::add_course_handler),
        )
        .route("/courses/:id", get(handlers::get_course_handler))
        .layer(axum::middleware::from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}
