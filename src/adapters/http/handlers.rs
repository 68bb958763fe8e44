use super::AppState;
use crate::domain::model::{Course, CourseCreationRequest};
use crate::utils::error::{EnrollError, Result};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

pub(crate) async fn list_courses_handler(State(state): State<AppState>) -> Result<Json<Vec<Course>>> {
    let courses = state.queries.list_all().await?;
    tracing::debug!("Listing {} course(s)", courses.len());
    Ok(Json(courses))
}

pub(crate) async fn get_course_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<u64>, PathRejection>,
) -> Result<Json<Course>> {
    let Path(id) = id.map_err(|e| EnrollError::validation("id", e.body_text()))?;
    Ok(Json(state.queries.get_by_id(id).await?))
}

pub(crate) async fn add_course_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<CourseCreationRequest>, JsonRejection>,
) -> Result<Json<Course>> {
    let Json(request) = body.map_err(|e| EnrollError::validation("body", e.body_text()))?;
    let course = state.add_course.add_course(request).await?;
    Ok(Json(course))
}
