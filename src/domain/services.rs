use crate::domain::model::{Course, CourseCreationRequest};
use crate::domain::ports::CourseRepository;
use crate::utils::error::{EnrollError, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct AddCourseService {
    repository: Arc<dyn CourseRepository>,
}

impl AddCourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn add_course(&self, request: CourseCreationRequest) -> Result<Course> {
        if !request.prerequisites.is_empty() || !request.majors.is_empty() {
            tracing::debug!(
                "Ignoring {} prerequisite id(s) and {} major id(s) on course creation",
                request.prerequisites.len(),
                request.majors.len()
            );
        }

        let new_course = request.course.validate()?;

        // 快速路徑；真正的唯一性由 repository.insert 保證
        if self.repository.find_by_number(&new_course.number).await?.is_some() {
            tracing::warn!("Rejected duplicate course number {}", new_course.number);
            return Err(EnrollError::Conflict {
                course_number: new_course.number.to_string(),
            });
        }

        let course = self.repository.insert(new_course).await.inspect_err(|e| {
            if matches!(e, EnrollError::Conflict { .. }) {
                tracing::warn!("Lost creation race: {}", e);
            }
        })?;

        tracing::info!(
            "✅ Registered course {} '{}' as #{}",
            course.course_number,
            course.course_title,
            course.course_id
        );
        Ok(course)
    }
}

#[derive(Clone)]
pub struct CourseQueryService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseQueryService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Course>> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Course> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EnrollError::NotFound { id })
    }
}
