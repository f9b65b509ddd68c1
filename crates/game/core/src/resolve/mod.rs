//! Action resolvers.
//!
//! Every resolver takes a read-only [`Combat`] view plus a [`Rolls`] cursor and
//! returns an [`ActionOutcome`]. Inside, a [`Duel`] holds private copies of both
//! combatants; the copies are diffed against the originals when the
//! resolution finishes, so the inputs are never mutated.
//!
//! | Resolver | Actor |
//! |---|---|
//! | [`basic_attack`] | player |
//! | [`weapon_art`] | player |
//! | [`class_skill`] | player |
//! | [`use_potion`] | player |
//! | [`opponent_attack`] | opponent |

mod attack;
mod class_skill;
mod opponent;
mod potion;
mod weapon_art;

pub use attack::basic_attack;
pub use class_skill::class_skill;
pub use opponent::opponent_attack;
pub use potion::use_potion;
pub use weapon_art::weapon_art;

use crate::combat::{
    ActionOutcome, FloatingText, FloatingTextKind, OutcomeBuilder, OutcomeFlags, Side,
};
use crate::config::GameConfig;
use crate::env::Rolls;
use crate::ledger::StatusKind;
use crate::passive::PassiveRegistry;
use crate::state::{Combatant, OpponentState, PlayerState};
use crate::stats::{DerivedStats, Loadout};

/// Read-only inputs shared by every resolver.
#[derive(Clone, Copy, Debug)]
pub struct Combat<'a> {
    pub player: &'a PlayerState,
    pub opponent: &'a OpponentState,
    pub stats: &'a DerivedStats,
    pub loadout: &'a Loadout<'a>,
    pub passives: &'a PassiveRegistry,
    pub config: &'a GameConfig,
    /// Class bonus added to basic-attack crit chance.
    pub crit_bonus: f64,
}

impl<'a> Combat<'a> {
    pub fn new(
        player: &'a PlayerState,
        opponent: &'a OpponentState,
        stats: &'a DerivedStats,
        loadout: &'a Loadout<'a>,
        passives: &'a PassiveRegistry,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            player,
            opponent,
            stats,
            loadout,
            passives,
            config,
            crit_bonus: 0.0,
        }
    }

    #[must_use]
    pub fn with_crit_bonus(mut self, crit_bonus: f64) -> Self {
        self.crit_bonus = crit_bonus;
        self
    }
}

/// Working state of one resolution.
///
/// Handlers and resolvers mutate `player` and `opponent` freely; only the
/// final diff leaves the resolver.
#[derive(Debug)]
pub struct Duel<'a> {
    pub combat: Combat<'a>,
    pub player: PlayerState,
    pub opponent: OpponentState,
    pub rolls: Rolls<'a>,
    pub out: OutcomeBuilder,
}

impl<'a> Duel<'a> {
    pub fn begin(combat: Combat<'a>, rolls: Rolls<'a>) -> Self {
        Self {
            player: combat.player.clone(),
            opponent: combat.opponent.clone(),
            combat,
            rolls,
            out: OutcomeBuilder::new(),
        }
    }

    pub fn finish(self) -> ActionOutcome {
        self.out.finish(
            self.combat.player,
            &self.player,
            self.combat.opponent,
            &self.opponent,
        )
    }

    pub fn stats(&self) -> &'a DerivedStats {
        self.combat.stats
    }

    pub fn loadout(&self) -> &'a Loadout<'a> {
        self.combat.loadout
    }

    pub fn config(&self) -> &'a GameConfig {
        self.combat.config
    }

    // ===== opponent side =====

    /// Removes up to `amount` health from the opponent. Returns the amount dealt.
    pub fn damage_opponent(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.opponent.hp);
        self.opponent.hp -= dealt;
        self.out.flag(OutcomeFlags::OPPONENT_SHAKE | OutcomeFlags::HIT_FLASH);
        dealt
    }

    pub fn opponent_alive(&self) -> bool {
        self.opponent.is_alive()
    }

    /// Plain application at full duration.
    pub fn inflict(&mut self, kind: StatusKind, custom_millis: Option<u32>) {
        self.opponent.statuses.apply(kind, custom_millis);
        self.out
            .float(FloatingText::labeled(FloatingTextKind::Status, Side::Opponent, kind.as_ref()));
        self.out.log(format!("{} is afflicted with {kind}.", self.opponent.name));
    }

    /// Resistance entry point: boss and elite opponents take half duration.
    pub fn inflict_resisted(&mut self, kind: StatusKind) {
        let halved = self.opponent.resists_control();
        self.opponent.statuses.apply_with_resistance(kind, None, halved);
        self.out
            .float(FloatingText::labeled(FloatingTextKind::Status, Side::Opponent, kind.as_ref()));
        if halved {
            self.out.log(format!("{} resists; {kind} is shortened.", self.opponent.name));
        } else {
            self.out.log(format!("{} is afflicted with {kind}.", self.opponent.name));
        }
    }

    // ===== player side =====

    /// Heals the player up to derived max health. Returns the amount restored.
    pub fn heal_player(&mut self, amount: u32) -> u32 {
        let max_hp = self.stats().max_hp;
        let healed = amount.min(max_hp.saturating_sub(self.player.hp));
        self.player.hp += healed;
        if amount > 0 {
            self.out
                .float(FloatingText::amount(FloatingTextKind::Heal, Side::Player, amount));
        }
        healed
    }

    /// Direct health loss that bypasses the shield. Returns the amount lost.
    pub fn wound_player(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.player.hp);
        self.player.hp -= lost;
        lost
    }

    pub fn record_damage(&mut self, total: u32) {
        if total > self.player.max_damage {
            self.player.max_damage = total;
        }
    }
}

/// Bleed punishes the act of attacking: `floor(max_hp × 0.02 × stacks)`.
///
/// Returns true if the actor died from it.
pub(crate) fn bleed_on_action(duel: &mut Duel<'_>, actor: Side) -> bool {
    match actor {
        Side::Player => {
            let Some(bleed) = duel.player.statuses.get(StatusKind::Bleed).copied() else {
                return false;
            };
            let damage = bleed.dot_damage(duel.stats().max_hp);
            duel.wound_player(damage);
            duel.out
                .float(FloatingText::amount(FloatingTextKind::Damage, Side::Player, damage));
            duel.out
                .log(format!("{} strains and bleeds for {damage}.", duel.player.name));
            !duel.player.is_alive()
        }
        Side::Opponent => {
            let Some(bleed) = duel.opponent.statuses.get(StatusKind::Bleed).copied() else {
                return false;
            };
            let damage = bleed.dot_damage(duel.opponent.max_hp);
            let dealt = damage.min(duel.opponent.hp);
            duel.opponent.hp -= dealt;
            duel.out
                .float(FloatingText::amount(FloatingTextKind::Damage, Side::Opponent, damage));
            duel.out
                .log(format!("{} strains and bleeds for {damage}.", duel.opponent.name));
            !duel.opponent.is_alive()
        }
    }
}
