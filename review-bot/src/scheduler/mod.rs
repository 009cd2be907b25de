//! Scheduler layer for the bot
//!
//! This layer owns the poll loop: it decides when to query the status API,
//! keeps the cursor between cycles, and handles cycle failures by kind.

pub mod poller;

pub use poller::StatusPoller;
