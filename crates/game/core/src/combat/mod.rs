//! Combat arithmetic and the outcome channel.
//!
//! # Architecture
//!
//! - **Pure Functions**: mitigation and elemental amplification never touch state
//! - **Outcome Builder**: resolvers accumulate effects append-only, then
//!   [`OutcomeBuilder::finish`] diffs the working copies into patches
//! - **Single Channel**: the encounter controller applies [`ActionOutcome`]s and
//!   nothing else mutates combatants during an encounter

pub mod damage;
pub mod outcome;

pub use damage::{
    HitModifiers, HitResolution, MITIGATION_CONSTANT, amplify_unmitigated, calculate_damage,
    resolve_hit,
};
pub use outcome::{
    ActionOutcome, Cooldowns, FloatingText, FloatingTextKind, OpponentPatch, OutcomeBuilder,
    OutcomeFlags, PlayerPatch,
};

/// Which combatant an effect or roll belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Stable numeric id mixed into RNG seeds.
    pub const fn id(self) -> u32 {
        match self {
            Self::Player => 0,
            Self::Opponent => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}
