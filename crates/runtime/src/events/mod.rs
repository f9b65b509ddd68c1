//! Event bus and topic routing for encounter notifications.
mod bus;

pub use bus::{Event, EventBus, Topic};
