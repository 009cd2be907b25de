//! Core domain types
//!
//! These types represent a homework whose review status has been recognised.
//! They are produced from DTOs once per poll cycle and never persisted.

pub mod homework;

pub use homework::{Homework, HomeworkStatus, UnknownStatus, render_message};
