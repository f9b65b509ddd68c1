//! Command-line host for auto-piloted encounters.
//!
//! The binary is the composition root: it reads [`ClientConfig`] from the
//! environment, installs logging, loads content, builds the runtime and runs
//! one [`Session`].

pub mod config;
pub mod logging;
mod session;

pub use config::ClientConfig;
pub use session::{Session, verdict};
