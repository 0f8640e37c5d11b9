use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::services::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineType {
    Exam,
    Midterm,
    Assignment,
}

impl DeadlineType {
    pub const ALL: [DeadlineType; 3] = [
        DeadlineType::Exam,
        DeadlineType::Midterm,
        DeadlineType::Assignment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineType::Exam => "exam",
            DeadlineType::Midterm => "midterm",
            DeadlineType::Assignment => "assignment",
        }
    }
}

impl fmt::Display for DeadlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for DeadlineType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for DeadlineType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A deadline as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Deadline {
    pub id: String,
    pub course: String,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub kind: DeadlineType,
    pub due_date: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

/// Raw client input for create and update. Every field is required; they are
/// optional here so that a missing field surfaces as a validation error.
/// Scalars of any JSON type are taken as text, so a numeric `due_date` is
/// rejected as a malformed date rather than by the body extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeadlineRequest {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "scalar_as_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub due_date: Option<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Validated and normalized fields, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeadline {
    pub course: String,
    pub title: String,
    pub kind: DeadlineType,
    pub due_date: NaiveDate,
}

/// A stored deadline plus the fields derived from the evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDeadline {
    #[serde(flatten)]
    pub deadline: Deadline,
    #[serde(rename = "daysRemaining")]
    pub days_remaining: i64,
    pub overdue: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deadline {
        Deadline {
            id: "d1".to_string(),
            course: "CS 241".to_string(),
            title: "Final".to_string(),
            kind: DeadlineType::Exam,
            due_date: NaiveDate::from_ymd_opt(2026, 12, 14).unwrap(),
            created_at: "2026-10-01T09:00:00+00:00".to_string(),
            updated_at: "2026-10-01T09:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn type_parses_case_insensitively() {
        assert_eq!("Midterm".parse::<DeadlineType>(), Ok(DeadlineType::Midterm));
        assert_eq!("ASSIGNMENT".parse::<DeadlineType>(), Ok(DeadlineType::Assignment));
        assert_eq!(" exam ".parse::<DeadlineType>(), Ok(DeadlineType::Exam));
    }

    #[test]
    fn type_rejects_unknown_values() {
        assert_eq!(
            "lab".parse::<DeadlineType>(),
            Err(ValidationError::UnknownType("lab".to_string()))
        );
        assert!("".parse::<DeadlineType>().is_err());
    }

    #[test]
    fn enriched_deadline_serializes_flat() {
        let enriched = EnrichedDeadline {
            deadline: sample(),
            days_remaining: 3,
            overdue: false,
        };

        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["id"], "d1");
        assert_eq!(value["type"], "exam");
        assert_eq!(value["due_date"], "2026-12-14");
        assert_eq!(value["daysRemaining"], 3);
        assert_eq!(value["overdue"], false);
        assert!(value.get("deadline").is_none());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn request_fields_default_to_none() {
        let req: DeadlineRequest = serde_json::from_str(r#"{"title":"Essay"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Essay"));
        assert!(req.course.is_none());
        assert!(req.kind.is_none());
        assert!(req.due_date.is_none());
    }

    #[test]
    fn request_takes_non_string_scalars_as_text() {
        let req: DeadlineRequest =
            serde_json::from_str(r#"{"course":101,"type":5,"due_date":20261020,"title":null}"#)
                .unwrap();
        assert_eq!(req.course.as_deref(), Some("101"));
        assert_eq!(req.kind.as_deref(), Some("5"));
        assert_eq!(req.due_date.as_deref(), Some("20261020"));
        assert!(req.title.is_none());
    }
}
