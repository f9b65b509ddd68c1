//! Asynchronous abstraction for sourcing player commands.
//!
//! Basic attacks fire on their own when a gauge fills; providers only decide
//! whether to spend a potion, a skill, an art or to run away. Runtime users
//! plug in implementations backed by human input, scripted fixtures or
//! simple policies such as [`AutoPilot`].
use async_trait::async_trait;
use battle_core::{EncounterPhase, PlayerCommand};

use super::errors::Result;
use super::view::EncounterView;

/// Trait for choosing player commands from the current encounter view.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Returns the command to issue before the next tick, if any.
    async fn decide(&self, view: &EncounterView) -> Result<Option<PlayerCommand>>;
}

/// Never issues commands; the player fights with basic attacks only.
pub struct IdleProvider;

#[async_trait]
impl ActionProvider for IdleProvider {
    async fn decide(&self, _view: &EncounterView) -> Result<Option<PlayerCommand>> {
        Ok(None)
    }
}

/// Greedy policy: drink when low, otherwise spend whatever is off cooldown.
#[derive(Debug, Clone, Copy)]
pub struct AutoPilot {
    /// Health fraction below which a potion is used.
    pub potion_threshold: f64,
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self {
            potion_threshold: 0.35,
        }
    }
}

impl AutoPilot {
    pub fn choose(&self, view: &EncounterView) -> Option<PlayerCommand> {
        let snapshot = &view.snapshot;
        let player = &snapshot.player;
        if snapshot.phase != EncounterPhase::Active || player.statuses.is_action_blocked() {
            return None;
        }

        if player.potions > 0 && view.player_hp_ratio() < self.potion_threshold {
            Some(PlayerCommand::UsePotion)
        } else if snapshot.cooldowns.class_skill_ready() {
            Some(PlayerCommand::ClassSkill)
        } else if player.weapon.is_some() && snapshot.cooldowns.weapon_art_ready() {
            Some(PlayerCommand::WeaponArt)
        } else {
            None
        }
    }
}

#[async_trait]
impl ActionProvider for AutoPilot {
    async fn decide(&self, view: &EncounterView) -> Result<Option<PlayerCommand>> {
        Ok(self.choose(view))
    }
}
