//! Encounter snapshot encoding.
//!
//! JSON is meant for inspection and save files a person may open; bincode is
//! the compact form for storage between ticks.
use battle_core::EncounterSnapshot;

use crate::api::{Result, RuntimeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SnapshotFormat {
    #[default]
    Json,
    Bincode,
}

pub fn encode_snapshot(snapshot: &EncounterSnapshot, format: SnapshotFormat) -> Result<Vec<u8>> {
    match format {
        SnapshotFormat::Json => {
            serde_json::to_vec_pretty(snapshot).map_err(RuntimeError::SnapshotJson)
        }
        SnapshotFormat::Bincode => {
            bincode::serialize(snapshot).map_err(RuntimeError::SnapshotBincode)
        }
    }
}

pub fn decode_snapshot(bytes: &[u8], format: SnapshotFormat) -> Result<EncounterSnapshot> {
    match format {
        SnapshotFormat::Json => serde_json::from_slice(bytes).map_err(RuntimeError::SnapshotJson),
        SnapshotFormat::Bincode => {
            bincode::deserialize(bytes).map_err(RuntimeError::SnapshotBincode)
        }
    }
}
