//! Hwbot Core - review-API access and shared models.
//!
//! This crate provides:
//! - The homework-review API client (`clients::PracticumClient`)
//! - Typed payload validation (`models::StatusReport`)
//! - The review status enumeration and its human-readable verdicts
//! - Typed error kinds for transport, shape and status failures

pub mod clients;
pub mod errors;
pub mod models;

pub use clients::PracticumClient;
pub use errors::{ApiError, HomeworkError, ResponseError};
pub use models::{Homework, HomeworkStatus, StatusReport};
