use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollError {
    #[error("Course number {course_number} is already registered")]
    Conflict { course_number: String },

    #[error("Course with id {id} was not found")]
    NotFound { id: u64 },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    RemoteError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EnrollError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        EnrollError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EnrollError::Conflict { .. }
            | EnrollError::NotFound { .. }
            | EnrollError::ValidationError { .. } => ErrorCategory::Domain,
            EnrollError::ConfigError { .. }
            | EnrollError::InvalidConfigValueError { .. }
            | EnrollError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            EnrollError::HttpClientError(_) | EnrollError::RemoteError { .. } => {
                ErrorCategory::Network
            }
            EnrollError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Domain | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EnrollError::Conflict { course_number } => {
                format!("課號 {} 已經存在 (course number already registered)", course_number)
            }
            EnrollError::NotFound { id } => format!("找不到課程 #{} (course not found)", id),
            EnrollError::ValidationError { field, message } => {
                format!("欄位 {} 無效: {}", field, message)
            }
            EnrollError::HttpClientError(_) => "無法連線到課程服務 (server unreachable)".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EnrollError::Conflict { .. } => "Use a different course number or fetch the existing course",
            EnrollError::NotFound { .. } => "List courses to find a valid course id",
            EnrollError::ValidationError { .. } => {
                "Course numbers are 7 digits, titles non-empty and credits positive"
            }
            EnrollError::ConfigError { .. }
            | EnrollError::InvalidConfigValueError { .. }
            | EnrollError::ConfigValidationError { .. } => {
                "Check the configuration file and command line flags"
            }
            EnrollError::HttpClientError(_) => "Make sure the server is running and --server is correct",
            EnrollError::RemoteError { .. } => "Inspect the server logs for details",
            EnrollError::IoError(_) => "Check file permissions and that the address is free",
        }
    }

    /// 對應到 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            EnrollError::Conflict { .. } | EnrollError::ValidationError { .. } => 400,
            EnrollError::NotFound { .. } => 404,
            EnrollError::RemoteError { status, .. } => *status,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnrollError>;
