pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::client::CourseClient;
pub use adapters::http::{build_router, AppState};
pub use adapters::storage::InMemoryCourseRepository;
pub use config::ServiceConfig;
pub use crate::core::server::CourseServer;
pub use domain::model::{Course, CourseCreationRequest, CourseDraft, CourseNumber, GraduateLevel};
pub use domain::services::{AddCourseService, CourseQueryService};
pub use utils::error::{EnrollError, Result};
