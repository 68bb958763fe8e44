use crate::utils::error::{EnrollError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const COURSE_NUMBER_LENGTH: usize = 7;

/// 課號：固定 7 位數字，序列化為 `{"courseNumber": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNumber {
    course_number: String,
}

impl CourseNumber {
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != COURSE_NUMBER_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(EnrollError::validation(
                "courseNumber",
                format!("must be exactly {} digits, got '{}'", COURSE_NUMBER_LENGTH, value),
            ));
        }
        Ok(Self {
            course_number: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.course_number
    }
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.course_number)
    }
}

// Accepts both the nested object form and a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum CourseNumberRepr {
    Nested {
        #[serde(rename = "courseNumber")]
        course_number: String,
    },
    Plain(String),
}

impl CourseNumberRepr {
    fn into_inner(self) -> String {
        match self {
            CourseNumberRepr::Nested { course_number } | CourseNumberRepr::Plain(course_number) => {
                course_number
            }
        }
    }
}

impl<'de> Deserialize<'de> for CourseNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = CourseNumberRepr::deserialize(deserializer)?.into_inner();
        CourseNumber::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraduateLevel {
    Undergraduate,
    Masters,
    #[serde(rename = "PHD")]
    Phd,
}

impl GraduateLevel {
    pub fn name(&self) -> &'static str {
        match self {
            GraduateLevel::Undergraduate => "Undergraduate",
            GraduateLevel::Masters => "Masters",
            GraduateLevel::Phd => "PHD",
        }
    }
}

impl std::str::FromStr for GraduateLevel {
    type Err = EnrollError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Undergraduate" => Ok(GraduateLevel::Undergraduate),
            "Masters" => Ok(GraduateLevel::Masters),
            "PHD" => Ok(GraduateLevel::Phd),
            other => Err(EnrollError::validation(
                "graduateLevel",
                format!("unknown level '{}', expected Undergraduate, Masters or PHD", other),
            )),
        }
    }
}

impl fmt::Display for GraduateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 已持久化的課程，`course_id` 由 store 指派
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: u64,
    pub course_number: CourseNumber,
    pub graduate_level: GraduateLevel,
    pub course_title: String,
    pub course_credits: u32,
    #[serde(default)]
    pub prerequisites: BTreeSet<u64>,
}

/// 尚未驗證的課程欄位 (來自 request body 或設定檔)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(deserialize_with = "course_number_text")]
    pub course_number: String,
    #[serde(alias = "title")]
    pub course_title: String,
    #[serde(alias = "credits")]
    pub course_credits: i64,
    pub graduate_level: GraduateLevel,
}

fn course_number_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(CourseNumberRepr::deserialize(deserializer)?.into_inner())
}

impl CourseDraft {
    pub fn new(number: &str, title: &str, credits: i64, level: GraduateLevel) -> Self {
        Self {
            course_number: number.to_string(),
            course_title: title.to_string(),
            course_credits: credits,
            graduate_level: level,
        }
    }

    pub fn validate(self) -> Result<NewCourse> {
        let number = CourseNumber::parse(&self.course_number)?;

        let title = self.course_title.trim();
        if title.is_empty() {
            return Err(EnrollError::validation("courseTitle", "must not be empty"));
        }

        if self.course_credits <= 0 {
            return Err(EnrollError::validation(
                "courseCredits",
                format!("must be positive, got {}", self.course_credits),
            ));
        }
        let credits = u32::try_from(self.course_credits).map_err(|_| {
            EnrollError::validation(
                "courseCredits",
                format!("{} is out of range", self.course_credits),
            )
        })?;

        Ok(NewCourse {
            number,
            title: title.to_string(),
            credits,
            graduate_level: self.graduate_level,
        })
    }
}

/// 驗證過、等待寫入的課程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub number: CourseNumber,
    pub title: String,
    pub credits: u32,
    pub graduate_level: GraduateLevel,
}

impl NewCourse {
    pub fn into_course(self, course_id: u64) -> Course {
        Course {
            course_id,
            course_number: self.number,
            graduate_level: self.graduate_level,
            course_title: self.title,
            course_credits: self.credits,
            prerequisites: BTreeSet::new(),
        }
    }
}

/// 新增課程的請求：課程欄位加上兩組關聯 id。
/// `prerequisites` 與 `majors` 目前只接收、不解讀。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreationRequest {
    pub course: CourseDraft,
    #[serde(default)]
    pub prerequisites: BTreeSet<u64>,
    #[serde(default)]
    pub majors: BTreeSet<u64>,
}

impl CourseCreationRequest {
    pub fn new(course: CourseDraft) -> Self {
        Self {
            course,
            prerequisites: BTreeSet::new(),
            majors: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_number_requires_seven_digits() {
        assert!(CourseNumber::parse("1234567").is_ok());
        assert!(CourseNumber::parse(" 1234567 ").is_err());
        assert!(CourseNumber::parse("1234567\n").is_err());
        assert!(CourseNumber::parse("123456").is_err());
        assert!(CourseNumber::parse("12345678").is_err());
        assert!(CourseNumber::parse("12a4567").is_err());
    }

    #[test]
    fn test_course_serializes_in_wire_order() {
        let course = NewCourse {
            number: CourseNumber::parse("1234567").unwrap(),
            title: "a".to_string(),
            credits: 3,
            graduate_level: GraduateLevel::Undergraduate,
        }
        .into_course(42);

        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(
            json,
            r#"{"courseId":42,"courseNumber":{"courseNumber":"1234567"},"graduateLevel":"Undergraduate","courseTitle":"a","courseCredits":3,"prerequisites":[]}"#
        );

        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn test_creation_request_accepts_nested_or_plain_number() {
        let nested = r#"{"course":{"courseNumber":{"courseNumber":"1234567"},"courseTitle":"a","courseCredits":3,"graduateLevel":"Undergraduate"},"prerequisites":[],"majors":[]}"#;
        let request: CourseCreationRequest = serde_json::from_str(nested).unwrap();
        assert_eq!(request.course.course_number, "1234567");

        let plain = r#"{"course":{"courseNumber":"7654321","title":"b","credits":2,"graduateLevel":"PHD"}}"#;
        let request: CourseCreationRequest = serde_json::from_str(plain).unwrap();
        assert_eq!(request.course.course_number, "7654321");
        assert_eq!(request.course.graduate_level, GraduateLevel::Phd);
        assert!(request.prerequisites.is_empty());
        assert!(request.majors.is_empty());
    }

    #[test]
    fn test_draft_validation_rejects_bad_fields() {
        let ok = CourseDraft::new("1234567", "  Algorithms ", 3, GraduateLevel::Masters).validate();
        assert_eq!(ok.unwrap().title, "Algorithms");

        let blank = CourseDraft::new("1234567", "   ", 3, GraduateLevel::Masters).validate();
        assert!(matches!(blank, Err(EnrollError::ValidationError { ref field, .. }) if field == "courseTitle"));

        let zero = CourseDraft::new("1234567", "a", 0, GraduateLevel::Masters).validate();
        assert!(matches!(zero, Err(EnrollError::ValidationError { ref field, .. }) if field == "courseCredits"));

        let short = CourseDraft::new("12", "a", 3, GraduateLevel::Masters).validate();
        assert!(matches!(short, Err(EnrollError::ValidationError { ref field, .. }) if field == "courseNumber"));
    }

    #[test]
    fn test_graduate_level_from_str() {
        assert_eq!("PHD".parse::<GraduateLevel>().unwrap(), GraduateLevel::Phd);
        assert!("Graduate".parse::<GraduateLevel>().is_err());
    }
}
