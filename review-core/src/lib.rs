//! Review Core
//!
//! Core types for the homework review bot.
//!
//! This crate contains:
//! - Domain types: review statuses, validated homework records and their verdicts
//! - DTOs: the wire shape of the status API and its validation

pub mod domain;
pub mod dto;
