//! Action outcomes: the only channel from resolvers to the encounter.
//!
//! Resolvers work on private copies of both combatants and record
//! presentation events on an [`OutcomeBuilder`]. When they finish, the builder
//! compares the copies against the originals and keeps only the fields that
//! changed. The controller applies the resulting patches in one pass.

use bitflags::bitflags;

use super::Side;
use crate::ledger::{BuffLedger, StatusLedger};
use crate::state::{OpponentState, PlayerState};

bitflags! {
    /// Presentation side effects requested by an outcome.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OutcomeFlags: u8 {
        /// The player took a hit.
        const SCREEN_SHAKE   = 1 << 0;
        /// The opponent took a hit.
        const OPPONENT_SHAKE = 1 << 1;
        const HIT_FLASH      = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloatingTextKind {
    Damage,
    Critical,
    Heal,
    Shield,
    Miss,
    Status,
    Buff,
    Immune,
}

/// Structured presentation event: what happened, to whom, how much.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingText {
    pub kind: FloatingTextKind,
    pub target: Side,
    pub magnitude: Option<u32>,
    pub label: Option<String>,
}

impl FloatingText {
    pub fn amount(kind: FloatingTextKind, target: Side, magnitude: u32) -> Self {
        Self {
            kind,
            target,
            magnitude: Some(magnitude),
            label: None,
        }
    }

    pub fn labeled(kind: FloatingTextKind, target: Side, label: impl Into<String>) -> Self {
        Self {
            kind,
            target,
            magnitude: None,
            label: Some(label.into()),
        }
    }
}

/// Cooldowns to reset after the action, in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    pub class_skill: Option<u32>,
    pub weapon_art: Option<u32>,
}

impl Cooldowns {
    pub fn is_empty(&self) -> bool {
        self.class_skill.is_none() && self.weapon_art.is_none()
    }
}

// ============================================================================
// Patches
// ============================================================================

/// Changed player fields. `None` means untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPatch {
    pub hp: Option<u32>,
    pub shield: Option<u32>,
    pub statuses: Option<StatusLedger>,
    pub buffs: Option<BuffLedger>,
    pub potions: Option<u32>,
    pub max_damage: Option<u32>,
}

impl PlayerPatch {
    /// Field-by-field comparison of two player states.
    pub fn from_states(before: &PlayerState, after: &PlayerState) -> Self {
        Self {
            hp: changed(&before.hp, &after.hp),
            shield: changed(&before.shield, &after.shield),
            statuses: changed(&before.statuses, &after.statuses),
            buffs: changed(&before.buffs, &after.buffs),
            potions: changed(&before.potions, &after.potions),
            max_damage: changed(&before.max_damage, &after.max_damage),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hp.is_none()
            && self.shield.is_none()
            && self.statuses.is_none()
            && self.buffs.is_none()
            && self.potions.is_none()
            && self.max_damage.is_none()
    }

    pub fn apply_to(&self, player: &mut PlayerState) {
        if let Some(hp) = self.hp {
            player.hp = hp;
        }
        if let Some(shield) = self.shield {
            player.shield = shield;
        }
        if let Some(statuses) = &self.statuses {
            player.statuses = statuses.clone();
        }
        if let Some(buffs) = &self.buffs {
            player.buffs = buffs.clone();
        }
        if let Some(potions) = self.potions {
            player.potions = potions;
        }
        if let Some(max_damage) = self.max_damage {
            player.max_damage = max_damage;
        }
    }
}

/// Changed opponent fields. `None` means untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentPatch {
    pub hp: Option<u32>,
    pub statuses: Option<StatusLedger>,
    pub buffs: Option<BuffLedger>,
}

impl OpponentPatch {
    pub fn from_states(before: &OpponentState, after: &OpponentState) -> Self {
        Self {
            hp: changed(&before.hp, &after.hp),
            statuses: changed(&before.statuses, &after.statuses),
            buffs: changed(&before.buffs, &after.buffs),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hp.is_none() && self.statuses.is_none() && self.buffs.is_none()
    }

    pub fn apply_to(&self, opponent: &mut OpponentState) {
        if let Some(hp) = self.hp {
            opponent.hp = hp;
        }
        if let Some(statuses) = &self.statuses {
            opponent.statuses = statuses.clone();
        }
        if let Some(buffs) = &self.buffs {
            opponent.buffs = buffs.clone();
        }
    }
}

fn changed<T: Clone + PartialEq>(before: &T, after: &T) -> Option<T> {
    (before != after).then(|| after.clone())
}

// ============================================================================
// Outcome
// ============================================================================

/// Everything one resolver invocation or one tick changed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub player: PlayerPatch,
    pub opponent: OpponentPatch,
    pub logs: Vec<String>,
    pub floating: Vec<FloatingText>,
    pub flags: OutcomeFlags,
    pub cooldowns: Cooldowns,
    /// Added to the player gauge after the acting gauge resets.
    pub player_gauge_delta: f64,
    pub opponent_gauge_delta: f64,
    pub player_died: bool,
    pub opponent_died: bool,
}

impl ActionOutcome {
    /// Policy rejection: no state change, one explanatory line.
    pub fn noop(log: impl Into<String>) -> Self {
        Self {
            logs: vec![log.into()],
            ..Self::default()
        }
    }

    /// True when applying this outcome would change nothing.
    pub fn is_noop(&self) -> bool {
        self.player.is_empty()
            && self.opponent.is_empty()
            && self.floating.is_empty()
            && self.flags.is_empty()
            && self.cooldowns.is_empty()
            && self.player_gauge_delta == 0.0
            && self.opponent_gauge_delta == 0.0
            && !self.player_died
            && !self.opponent_died
    }

    pub fn is_terminal(&self) -> bool {
        self.player_died || self.opponent_died
    }
}

/// Append-only accumulator for one resolution.
///
/// Nothing recorded here is ever read back while resolving; decisions are made
/// from the working combatant copies only.
#[derive(Clone, Debug, Default)]
pub struct OutcomeBuilder {
    logs: Vec<String>,
    floating: Vec<FloatingText>,
    flags: OutcomeFlags,
    cooldowns: Cooldowns,
    player_gauge_delta: f64,
    opponent_gauge_delta: f64,
}

impl OutcomeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }

    pub fn float(&mut self, text: FloatingText) {
        self.floating.push(text);
    }

    pub fn flag(&mut self, flags: OutcomeFlags) {
        self.flags |= flags;
    }

    pub fn class_skill_cooldown(&mut self, millis: u32) {
        self.cooldowns.class_skill = Some(millis);
    }

    pub fn weapon_art_cooldown(&mut self, millis: u32) {
        self.cooldowns.weapon_art = Some(millis);
    }

    pub fn gauge(&mut self, side: Side, delta: f64) {
        match side {
            Side::Player => self.player_gauge_delta += delta,
            Side::Opponent => self.opponent_gauge_delta += delta,
        }
    }

    /// Diffs the working copies against the originals and seals the outcome.
    pub fn finish(
        self,
        player_before: &PlayerState,
        player_after: &PlayerState,
        opponent_before: &OpponentState,
        opponent_after: &OpponentState,
    ) -> ActionOutcome {
        ActionOutcome {
            player: PlayerPatch::from_states(player_before, player_after),
            opponent: OpponentPatch::from_states(opponent_before, opponent_after),
            logs: self.logs,
            floating: self.floating,
            flags: self.flags,
            cooldowns: self.cooldowns,
            player_gauge_delta: self.player_gauge_delta,
            opponent_gauge_delta: self.opponent_gauge_delta,
            player_died: player_before.hp > 0 && player_after.hp == 0,
            opponent_died: opponent_before.hp > 0 && opponent_after.hp == 0,
        }
    }
}
