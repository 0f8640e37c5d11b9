use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::error::AppError;
use crate::models::{DeadlineRequest, DeadlineType, NewDeadline};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Type must be \"exam\", \"midterm\", or \"assignment\" (got \"{0}\")")]
    UnknownType(String),

    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("due_date \"{input}\" is not a valid date")]
pub struct MalformedDateError {
    pub input: String,
}

pub fn validate_type(input: &str) -> Result<DeadlineType, ValidationError> {
    input.parse()
}

/// Accepts `YYYY-MM-DD`, RFC 3339 date-times and naive ISO date-times.
/// For date-times only the calendar date, as written, is kept.
pub fn parse_due_date(input: &str) -> Result<NaiveDate, MalformedDateError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }

    Err(MalformedDateError {
        input: input.to_string(),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Checks presence first, then the type, then the date.
pub fn validate_request(req: DeadlineRequest) -> Result<NewDeadline, AppError> {
    let course = required(req.course, "course")?;
    let title = required(req.title, "title")?;
    let kind = required(req.kind, "type")?;
    let due_date = required(req.due_date, "due_date")?;

    Ok(NewDeadline {
        course,
        title,
        kind: validate_type(&kind)?,
        due_date: parse_due_date(&due_date)?,
    })
}
