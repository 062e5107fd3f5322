//! Typed errors for the review-API client and payload validation.

use thiserror::Error;

/// Errors raised while talking to the homework-review endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout, or any other transport-level problem
    #[error("request to review API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("review API returned status {status} for {endpoint} (from_date={from_date})")]
    Status {
        status: u16,
        endpoint: String,
        from_date: i64,
    },

    /// The response body was not valid JSON
    #[error("review API body is not JSON: {0}")]
    Decode(String),
}

/// The response payload does not match the documented shape.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("expected a JSON object, got {got}")]
    NotAnObject { got: &'static str },

    #[error("response is missing required key \"{key}\"")]
    MissingKey { key: &'static str },

    #[error("\"homeworks\" must be a list, got {got}")]
    HomeworksNotAList { got: &'static str },

    #[error("\"current_date\" must be an integer timestamp")]
    BadCurrentDate,

    #[error("homework record at index {index} is malformed: {reason}")]
    BadHomework { index: usize, reason: String },
}

/// Errors raised while interpreting a single homework record.
#[derive(Debug, Error)]
pub enum HomeworkError {
    /// The record is missing its name or status (or either is empty)
    #[error("homework record is incomplete: homework_name and status are required")]
    Incomplete,

    /// The status string is outside the documented enumeration
    #[error("homework \"{homework}\" has unexpected status \"{status}\"")]
    UnknownStatus { homework: String, status: String },
}
