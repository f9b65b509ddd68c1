//! Async host for the deterministic combat engine.
//!
//! This crate wires together content-backed oracles, the encounter worker,
//! the event bus and action providers into a cohesive runtime API. Consumers
//! embed [`Runtime`] to run encounters, subscribe to events, and interact
//! with the fight through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`narrative`] turns loaded story scripts into a narrative oracle
//! - [`oracle`] adapts loaded content to the battle-core oracle traits
//! - [`snapshot`] encodes encounter snapshots for hosts that persist them
//! - `workers` keeps the encounter task internal to the crate
pub mod api;
pub mod events;
pub mod narrative;
pub mod oracle;
pub mod runtime;
pub mod snapshot;

mod workers;

pub use api::{
    ActionProvider, AutoPilot, EncounterSummary, EncounterView, IdleProvider, Progress, Result,
    RuntimeError, RuntimeHandle,
};
pub use events::{Event, EventBus, Topic};
pub use narrative::ScriptRegistry;
pub use oracle::{ActorOracleImpl, ItemOracleImpl, OracleManager, SkillOracleImpl};
pub use runtime::{Clock, Runtime, RuntimeBuilder, RuntimeConfig};
pub use snapshot::{SnapshotFormat, decode_snapshot, encode_snapshot};
