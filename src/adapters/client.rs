use crate::adapters::http::ErrorBody;
use crate::domain::model::{Course, CourseCreationRequest};
use crate::utils::error::{EnrollError, Result};
use crate::utils::validation::validate_url;
use reqwest::{Client, Response};
use url::Url;

/// 呼叫課程服務 HTTP API 的客戶端
#[derive(Debug, Clone)]
pub struct CourseClient {
    base_url: Url,
    client: Client,
}

impl CourseClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = validate_url("server", base_url)?;
        // join() drops the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| EnrollError::InvalidConfigValueError {
                field: "server".to_string(),
                value: self.base_url.to_string(),
                reason: format!("cannot build endpoint '{}': {}", path, e),
            })
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let url = self.endpoint("courses")?;
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_course(&self, id: u64) -> Result<Course> {
        let url = self.endpoint(&format!("courses/{}", id))?;
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(EnrollError::NotFound { id });
        }
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn add_course(&self, request: &CourseCreationRequest) -> Result<Course> {
        let url = self.endpoint("courses")?;
        tracing::debug!("Posting course {} to: {}", request.course.course_number, url);
        let response = self.client.post(url).json(request).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(EnrollError::RemoteError {
            status: status.as_u16(),
            message,
        })
    }
}
