//! Service layer
//!
//! Services are the seams between the poll loop and the outside world:
//! where homework statuses come from and where notifications go.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;
mod statuses;

// Re-export traits
pub use notifier::Notifier;
pub use statuses::StatusSource;

// Re-export implementations
pub use notifier::TelegramNotifier;
pub use statuses::PracticumStatusSource;
