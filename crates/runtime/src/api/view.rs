//! Read-only views returned by the encounter worker.
use serde::{Deserialize, Serialize};

use battle_core::{ActionOutcome, DerivedStats, EncounterPhase, EncounterSnapshot};

/// State a provider needs to pick its next command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterView {
    pub snapshot: EncounterSnapshot,
    /// Player stats derived from the snapshot's equipment and buffs.
    pub player_stats: DerivedStats,
}

impl EncounterView {
    pub fn phase(&self) -> EncounterPhase {
        self.snapshot.phase
    }

    pub fn is_over(&self) -> bool {
        self.snapshot.phase.is_terminal()
    }

    /// Current health as a fraction of derived max health.
    pub fn player_hp_ratio(&self) -> f64 {
        f64::from(self.snapshot.player.hp) / f64::from(self.player_stats.max_hp.max(1))
    }
}

/// Outcomes applied by one worker command and the state they left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub outcomes: Vec<ActionOutcome>,
    pub view: EncounterView,
}

impl Progress {
    pub fn is_over(&self) -> bool {
        self.view.is_over()
    }
}

/// Result of driving an encounter to a terminal phase.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterSummary {
    pub phase: EncounterPhase,
    pub ticks: u64,
    pub elapsed_millis: u64,
    /// Every outcome in application order, starting with the opening one.
    pub outcomes: Vec<ActionOutcome>,
    pub view: EncounterView,
}

impl EncounterSummary {
    pub fn victory(&self) -> bool {
        self.phase == EncounterPhase::OpponentDefeated
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .flat_map(|outcome| outcome.logs.iter().map(String::as_str))
    }
}
