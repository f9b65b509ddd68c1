//! Combatant state owned by the encounter controller.
//!
//! Player and opponent are two explicit variants sharing the [`Combatant`]
//! view. Resolvers read them through shared references and never mutate
//! them; the controller applies outcome patches.
mod opponent;
mod player;

pub use opponent::{OpponentRole, OpponentState};
pub use player::{Attributes, EquipSlot, Inventory, ItemState, PlayerState};

use crate::ledger::{BuffLedger, StatusLedger};

/// Read access shared by both sides of an encounter.
pub trait Combatant {
    /// Display name used in log lines.
    fn label(&self) -> &str;

    fn hp(&self) -> u32;

    fn shield(&self) -> u32 {
        0
    }

    fn statuses(&self) -> &StatusLedger;

    fn buffs(&self) -> &BuffLedger;

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// True while stunned or frozen.
    fn is_action_blocked(&self) -> bool {
        self.statuses().is_action_blocked()
    }
}
