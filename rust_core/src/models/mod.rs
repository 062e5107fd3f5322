// Shared models for the homework status watcher
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{HomeworkError, ResponseError};

// ============================================================================
// Review status & verdicts
// ============================================================================

/// Review state of a submitted homework, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse the wire string; `None` for anything outside the enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

// ============================================================================
// Homework record
// ============================================================================

/// One homework entry from the review API. Only `homework_name` and `status`
/// are contractual; the rest is carried when the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: String,
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub lesson_name: Option<String>,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
}

impl Homework {
    /// Resolve the record's status against the documented enumeration.
    pub fn review_status(&self) -> Result<HomeworkStatus, HomeworkError> {
        if self.homework_name.is_empty() || self.status.is_empty() {
            return Err(HomeworkError::Incomplete);
        }
        HomeworkStatus::parse(&self.status).ok_or_else(|| HomeworkError::UnknownStatus {
            homework: self.homework_name.clone(),
            status: self.status.clone(),
        })
    }
}

// ============================================================================
// Status report (validated API response)
// ============================================================================

/// Validated body of a `homework_statuses` response.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub homeworks: Vec<Homework>,
    /// Server-side timestamp; becomes the next polling cursor.
    pub current_date: i64,
}

impl StatusReport {
    /// Check a raw payload against the documented shape and map it into a
    /// typed report. Both required keys must be present, `homeworks` must be
    /// a list and `current_date` an integer.
    pub fn from_value(value: Value) -> Result<Self, ResponseError> {
        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(ResponseError::NotAnObject {
                    got: json_type_name(&other),
                })
            }
        };

        for key in ["homeworks", "current_date"] {
            if !object.contains_key(key) {
                return Err(ResponseError::MissingKey { key });
            }
        }

        let homeworks_value = &object["homeworks"];
        let items = homeworks_value
            .as_array()
            .ok_or(ResponseError::HomeworksNotAList {
                got: json_type_name(homeworks_value),
            })?;

        let current_date = object["current_date"]
            .as_i64()
            .ok_or(ResponseError::BadCurrentDate)?;

        let mut homeworks = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let homework: Homework = serde_json::from_value(item.clone()).map_err(|e| {
                ResponseError::BadHomework {
                    index,
                    reason: e.to_string(),
                }
            })?;
            homeworks.push(homework);
        }

        Ok(Self {
            homeworks,
            current_date,
        })
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn homework(name: &str, status: &str) -> Homework {
        Homework {
            homework_name: name.to_string(),
            status: status.to_string(),
            id: None,
            lesson_name: None,
            reviewer_comment: None,
            date_updated: None,
        }
    }

    #[test]
    fn test_status_parse_known() {
        assert_eq!(
            HomeworkStatus::parse("approved"),
            Some(HomeworkStatus::Approved)
        );
        assert_eq!(
            HomeworkStatus::parse("reviewing"),
            Some(HomeworkStatus::Reviewing)
        );
        assert_eq!(
            HomeworkStatus::parse("rejected"),
            Some(HomeworkStatus::Rejected)
        );
    }

    #[test]
    fn test_status_parse_unknown() {
        assert_eq!(HomeworkStatus::parse("in_review"), None);
        assert_eq!(HomeworkStatus::parse("APPROVED"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
    }

    #[test]
    fn test_report_happy_path() {
        let report = StatusReport::from_value(json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "reviewing"},
                {"homework_name": "hw2", "status": "approved", "reviewer_comment": "nice"}
            ],
            "current_date": 1000
        }))
        .unwrap();

        assert_eq!(report.current_date, 1000);
        assert_eq!(report.homeworks.len(), 2);
        assert_eq!(
            report.homeworks[0].review_status().unwrap(),
            HomeworkStatus::Reviewing
        );
        assert_eq!(
            report.homeworks[1].reviewer_comment.as_deref(),
            Some("nice")
        );
    }

    #[test]
    fn test_report_not_an_object() {
        let err = StatusReport::from_value(json!(["not", "a", "dict"])).unwrap_err();
        assert!(matches!(err, ResponseError::NotAnObject { got: "array" }));
    }

    #[test]
    fn test_report_missing_keys() {
        let err = StatusReport::from_value(json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey { key: "homeworks" }));

        let err = StatusReport::from_value(json!({"homeworks": []})).unwrap_err();
        assert!(matches!(
            err,
            ResponseError::MissingKey { key: "current_date" }
        ));
    }

    #[test]
    fn test_report_homeworks_not_a_list() {
        let err = StatusReport::from_value(json!({
            "homeworks": {"homework_name": "hw1"},
            "current_date": 1000
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ResponseError::HomeworksNotAList { got: "object" }
        ));
    }

    #[test]
    fn test_report_bad_current_date() {
        let err = StatusReport::from_value(json!({
            "homeworks": [],
            "current_date": "soon"
        }))
        .unwrap_err();
        assert!(matches!(err, ResponseError::BadCurrentDate));
    }

    #[test]
    fn test_homework_unknown_status() {
        let err = homework("hw1", "burned").review_status().unwrap_err();
        assert!(matches!(err, HomeworkError::UnknownStatus { .. }));
        assert!(err.to_string().contains("hw1"));
        assert!(err.to_string().contains("burned"));
    }

    #[test]
    fn test_homework_incomplete() {
        assert!(matches!(
            homework("", "approved").review_status().unwrap_err(),
            HomeworkError::Incomplete
        ));
        assert!(matches!(
            homework("hw1", "").review_status().unwrap_err(),
            HomeworkError::Incomplete
        ));
    }

    #[test]
    fn test_verdict_texts() {
        assert_eq!(
            HomeworkStatus::Approved.verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            HomeworkStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            HomeworkStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }
}
