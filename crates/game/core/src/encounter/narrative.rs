//! Story trigger interface.
//!
//! The engine only asks whether a script fires at an encounter boundary; it
//! never looks inside the payload.

use crate::state::PlayerState;

/// Encounter boundary at which scripts may fire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NarrativePhase {
    BeforeBattle,
    AfterBattle,
    Camp,
}

/// Where the player is when a hook is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativeContext {
    /// Host-defined location tag (`"battle"`, `"camp"`, ...).
    pub location: String,
    pub depth: u32,
    pub max_depth: u32,
}

impl NarrativeContext {
    pub fn new(location: impl Into<String>, depth: u32, max_depth: u32) -> Self {
        Self {
            location: location.into(),
            depth,
            max_depth,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

/// Opaque script handed back to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptPayload {
    pub id: String,
    pub lines: Vec<DialogueLine>,
    /// Flags the host records on the player once the script has played.
    pub set_flags: Vec<String>,
    /// Host should leave the dungeon after the script.
    pub force_return: bool,
}

/// Decides whether a script fires for the player at a boundary.
pub trait NarrativeOracle: Send + Sync {
    fn should_trigger(
        &self,
        player: &PlayerState,
        ctx: &NarrativeContext,
        phase: NarrativePhase,
    ) -> Option<ScriptPayload>;
}
