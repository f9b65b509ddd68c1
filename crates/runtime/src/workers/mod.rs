//! Worker tasks that back the runtime orchestration.
//!
//! The encounter worker owns the authoritative [`battle_core::Encounter`] and
//! serializes every command against it.

mod encounter;

pub use encounter::{Command, EncounterWorker};
