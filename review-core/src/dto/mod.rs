//! Data Transfer Objects for the status API
//!
//! DTOs mirror the JSON returned by the homework status endpoint. They carry
//! raw strings; conversion into domain types happens in [`crate::domain`].

pub mod statuses;

pub use statuses::{HomeworkEntry, ShapeError, StatusBatch, validate_response};
