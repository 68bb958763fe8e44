use crate::domain::model::{Course, CourseNumber, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::utils::error::{EnrollError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    // BTreeMap keeps id order == insertion order
    courses: BTreeMap<u64, Course>,
    by_number: HashMap<CourseNumber, u64>,
    next_id: u64,
}

/// 記憶體中的課程儲存。讀取共用 read lock，寫入在同一個 write lock 內檢查課號。
#[derive(Debug)]
pub struct InMemoryCourseRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                courses: BTreeMap::new(),
                by_number: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.courses.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_number(&self, number: &CourseNumber) -> Result<Option<Course>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_number
            .get(number)
            .and_then(|id| inner.courses.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Course>> {
        Ok(self.inner.read().await.courses.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Course>> {
        Ok(self.inner.read().await.courses.values().cloned().collect())
    }

    async fn insert(&self, course: NewCourse) -> Result<Course> {
        let mut inner = self.inner.write().await;

        if inner.by_number.contains_key(&course.number) {
            return Err(EnrollError::Conflict {
                course_number: course.number.to_string(),
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let course = course.into_course(id);
        inner.by_number.insert(course.course_number.clone(), id);
        inner.courses.insert(id, course.clone());

        tracing::debug!("Stored course #{} ({} total)", id, inner.courses.len());
        Ok(course)
    }

    async fn delete_all(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        let removed = inner.courses.len();
        inner.courses.clear();
        inner.by_number.clear();
        tracing::info!("🧹 Cleared {} course(s) from the store", removed);
        Ok(())
    }
}
