use crate::env::{MonsterTemplate, OnHitTable};
use crate::ledger::{BuffLedger, StatusLedger};
use crate::state::Combatant;

/// Behavioral tag gating role-conditioned buff triggers.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OpponentRole {
    #[default]
    Standard,
    /// Fortifies once below the tank threshold.
    Tank,
    /// Opens every encounter hasted.
    Rusher,
    /// Goes berserk once below the boss threshold.
    Boss,
    Elite,
}

/// Opponent spawned fresh for a single encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentState {
    pub name: String,
    pub template_id: String,
    pub role: OpponentRole,
    pub is_boss: bool,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub speed: u32,
    pub gold: u32,
    pub exp: u32,
    pub statuses: StatusLedger,
    pub buffs: BuffLedger,
    pub on_hit: OnHitTable,
}

impl OpponentState {
    pub fn spawn(template: &MonsterTemplate) -> Self {
        Self {
            name: template.name.clone(),
            template_id: template.id.clone(),
            role: template.role,
            is_boss: template.is_boss,
            hp: template.hp,
            max_hp: template.hp,
            atk: template.atk,
            def: template.def,
            speed: template.speed,
            gold: template.gold,
            exp: template.exp,
            statuses: StatusLedger::empty(),
            buffs: BuffLedger::empty(),
            on_hit: template.on_hit.clone(),
        }
    }

    /// Bare opponent with flat stats and no on-hit table.
    pub fn with_stats(name: impl Into<String>, hp: u32, atk: u32, def: u32, speed: u32) -> Self {
        let name = name.into();
        Self {
            template_id: name.clone(),
            name,
            role: OpponentRole::Standard,
            is_boss: false,
            hp,
            max_hp: hp,
            atk,
            def,
            speed,
            gold: 0,
            exp: 0,
            statuses: StatusLedger::empty(),
            buffs: BuffLedger::empty(),
            on_hit: OnHitTable::default(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: OpponentRole) -> Self {
        self.role = role;
        self
    }

    /// Boss and elite opponents take halved control durations.
    pub fn resists_control(&self) -> bool {
        self.is_boss || matches!(self.role, OpponentRole::Boss | OpponentRole::Elite)
    }

    /// Current health as a fraction of max health.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}

impl Combatant for OpponentState {
    fn label(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn statuses(&self) -> &StatusLedger {
        &self.statuses
    }

    fn buffs(&self) -> &BuffLedger {
        &self.buffs
    }
}
