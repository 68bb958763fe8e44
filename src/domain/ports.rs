use crate::domain::model::{Course, CourseNumber, NewCourse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 課程儲存層。實作必須保證同一課號最多只有一筆。
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_number(&self, number: &CourseNumber) -> Result<Option<Course>>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Course>>;

    /// 依寫入順序回傳所有課程
    async fn list_all(&self) -> Result<Vec<Course>>;

    /// Checks the number and inserts under one lock. Returns
    /// `EnrollError::Conflict` when the number is already taken; a rejected
    /// insert consumes no id.
    async fn insert(&self, course: NewCourse) -> Result<Course>;

    /// 清空所有課程，id 序號不會歸零
    async fn delete_all(&self) -> Result<()>;
}
