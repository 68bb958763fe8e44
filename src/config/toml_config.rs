use crate::domain::model::{CourseCreationRequest, CourseDraft, GraduateLevel};
use crate::utils::error::{EnrollError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub shutdown_grace_seconds: Option<u64>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            shutdown_grace_seconds: None,
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
}

/// 啟動時預先載入的課程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCourse {
    pub number: String,
    pub title: String,
    pub credits: i64,
    #[serde(default = "default_level")]
    pub graduate_level: GraduateLevel,
}

fn default_level() -> GraduateLevel {
    GraduateLevel::Undergraduate
}

impl SeedCourse {
    pub fn to_request(&self) -> CourseCreationRequest {
        CourseCreationRequest::new(CourseDraft::new(
            &self.number,
            &self.title,
            self.credits,
            self.graduate_level,
        ))
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EnrollError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EnrollError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIND_ADDRESS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EnrollError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.bind_address", &self.server.bind_address)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_grace_seconds.unwrap_or(5))
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.bind_address()?;

        if let Some(grace) = self.server.shutdown_grace_seconds {
            validation::validate_positive_number("server.shutdown_grace_seconds", grace, 1)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        for (index, seed) in self.catalog.courses.iter().enumerate() {
            seed.to_request()
                .course
                .validate()
                .map_err(|e| EnrollError::ConfigValidationError {
                    field: format!("catalog.courses[{}]", index),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
bind_address = "0.0.0.0:9090"
shutdown_grace_seconds = 2

[logging]
level = "debug"
json = true

[[catalog.courses]]
number = "1234567"
title = "Programming Fundamentals"
credits = 3

[[catalog.courses]]
number = "7654321"
title = "Advanced Compilers"
credits = 4
graduate_level = "PHD"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address().unwrap().port(), 9090);
        assert_eq!(config.shutdown_grace(), Duration::from_secs(2));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.logging.json);
        assert_eq!(config.catalog.courses.len(), 2);
        assert_eq!(config.catalog.courses[0].graduate_level, GraduateLevel::Undergraduate);
        assert_eq!(config.catalog.courses[1].graduate_level, GraduateLevel::Phd);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.shutdown_grace(), Duration::from_secs(5));
        assert!(config.catalog.courses.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ENROLL_TEST_BIND", "127.0.0.1:7001");

        let config = ServiceConfig::from_toml_str(
            r#"
[server]
bind_address = "${ENROLL_TEST_BIND}"
"#,
        )
        .unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:7001");

        std::env::remove_var("ENROLL_TEST_BIND");
    }

    #[test]
    fn test_config_validation() {
        let bad_addr = ServiceConfig::from_toml_str("[server]\nbind_address = \"nowhere\"\n").unwrap();
        assert!(bad_addr.validate().is_err());

        let bad_level = ServiceConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let bad_seed = ServiceConfig::from_toml_str(
            r#"
[[catalog.courses]]
number = "12"
title = "Too Short"
credits = 3
"#,
        )
        .unwrap();
        assert!(matches!(
            bad_seed.validate(),
            Err(EnrollError::ConfigValidationError { ref field, .. }) if field == "catalog.courses[0]"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind_address = \"127.0.0.1:0\"\n")
            .unwrap();

        let config = ServiceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address().unwrap().port(), 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ServiceConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EnrollError::IoError(_)));
    }
}
