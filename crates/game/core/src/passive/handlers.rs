//! Standard reactive passives.

use std::sync::Arc;

use super::{PassiveEffect, PassiveHandler, PassivePhase};
use crate::combat::damage::floor_u32;
use crate::combat::{FloatingText, FloatingTextKind, Side};
use crate::ledger::{BuffKind, StatusKind};
use crate::resolve::Duel;
use crate::stats::Stacked;

const LIFE_STEAL_RATIO: f64 = 0.1;
const BERSERK_ON_HIT_MILLIS: u32 = 8_000;

/// Every built-in handler, in execution order.
pub fn standard_handlers() -> Vec<Arc<dyn PassiveHandler>> {
    vec![
        Arc::new(LifeSteal),
        Arc::new(StatusOnHit::plain(PassiveEffect::BleedOnHit, StatusKind::Bleed, 10)),
        Arc::new(StatusOnHit::plain(PassiveEffect::PoisonHit, StatusKind::Poison, 20)),
        Arc::new(StatusOnHit::plain(PassiveEffect::BurnHit, StatusKind::Burn, 30)),
        Arc::new(StatusOnHit::resisted(PassiveEffect::FreezeHit, StatusKind::Frozen, 40)),
        Arc::new(StatusOnHit::resisted(PassiveEffect::StunHit, StatusKind::Stun, 50)),
        Arc::new(FalconBlitz),
        Arc::new(Thorns),
        Arc::new(BerserkOnHit),
    ]
}

// ============================================================================
// On hit
// ============================================================================

/// Heals `floor(damage × 0.1 × count)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeSteal;

impl PassiveHandler for LifeSteal {
    fn effect(&self) -> PassiveEffect {
        PassiveEffect::LifeSteal
    }

    fn phase(&self) -> PassivePhase {
        PassivePhase::OnHit
    }

    fn apply(&self, duel: &mut Duel<'_>, stacked: Stacked, damage: u32) {
        let heal = floor_u32(f64::from(damage) * LIFE_STEAL_RATIO * f64::from(stacked.count));
        if heal > 0 {
            duel.heal_player(heal);
        }
    }
}

/// Inflicts a status with the summed chance.
///
/// Control statuses go through the resistance entry point so bosses and
/// elites shrug them off faster.
#[derive(Clone, Copy, Debug)]
pub struct StatusOnHit {
    effect: PassiveEffect,
    status: StatusKind,
    resisted: bool,
    priority: i32,
}

impl StatusOnHit {
    pub const fn plain(effect: PassiveEffect, status: StatusKind, priority: i32) -> Self {
        Self {
            effect,
            status,
            resisted: false,
            priority,
        }
    }

    pub const fn resisted(effect: PassiveEffect, status: StatusKind, priority: i32) -> Self {
        Self {
            effect,
            status,
            resisted: true,
            priority,
        }
    }
}

impl PassiveHandler for StatusOnHit {
    fn effect(&self) -> PassiveEffect {
        self.effect
    }

    fn phase(&self) -> PassivePhase {
        PassivePhase::OnHit
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, duel: &mut Duel<'_>, stacked: Stacked, _damage: u32) {
        if !duel.rolls.chance(stacked.chance()) {
            return;
        }
        if self.resisted {
            duel.inflict_resisted(self.status);
        } else {
            duel.inflict(self.status, None);
        }
    }
}

/// Follow-up strike for `floor(int × 1.5 + agi × 0.5)`, ignoring defense.
#[derive(Clone, Copy, Debug, Default)]
pub struct FalconBlitz;

impl PassiveHandler for FalconBlitz {
    fn effect(&self) -> PassiveEffect {
        PassiveEffect::FalconBlitz
    }

    fn phase(&self) -> PassivePhase {
        PassivePhase::OnHit
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, duel: &mut Duel<'_>, stacked: Stacked, _damage: u32) {
        if !duel.rolls.chance(stacked.chance()) {
            return;
        }
        let attrs = duel.stats().attributes;
        let damage = floor_u32(f64::from(attrs.intellect) * 1.5 + f64::from(attrs.agility) * 0.5);
        duel.damage_opponent(damage);
        duel.out
            .float(FloatingText::amount(FloatingTextKind::Critical, Side::Opponent, damage));
        duel.out
            .log(format!("A falcon dives for {damage} damage, ignoring defense."));
    }
}

// ============================================================================
// Struck
// ============================================================================

/// Reflects `max(1, floor(damage × value))` once per thorns affix.
#[derive(Clone, Copy, Debug, Default)]
pub struct Thorns;

impl PassiveHandler for Thorns {
    fn effect(&self) -> PassiveEffect {
        PassiveEffect::Thorns
    }

    fn phase(&self) -> PassivePhase {
        PassivePhase::OnStruck
    }

    fn apply(&self, duel: &mut Duel<'_>, _stacked: Stacked, damage: u32) {
        let loadout = duel.loadout();
        for ratio in loadout.values(PassiveEffect::Thorns) {
            let reflected = floor_u32(f64::from(damage) * ratio).max(1);
            duel.damage_opponent(reflected);
            duel.out
                .float(FloatingText::amount(FloatingTextKind::Damage, Side::Opponent, reflected));
        }
        if !duel.opponent_alive() {
            duel.out
                .log(format!("{} is torn apart by thorns.", duel.opponent.name));
        }
    }
}

/// Summed chance to go berserk for 8 s when hit, unless already berserk.
#[derive(Clone, Copy, Debug, Default)]
pub struct BerserkOnHit;

impl PassiveHandler for BerserkOnHit {
    fn effect(&self) -> PassiveEffect {
        PassiveEffect::BerserkOnHit
    }

    fn phase(&self) -> PassivePhase {
        PassivePhase::OnStruck
    }

    fn priority(&self) -> i32 {
        10
    }

    fn apply(&self, duel: &mut Duel<'_>, stacked: Stacked, _damage: u32) {
        if !duel.rolls.chance(stacked.chance()) || duel.player.buffs.has(BuffKind::Berserk) {
            return;
        }
        duel.player
            .buffs
            .apply(BuffKind::Berserk, BERSERK_ON_HIT_MILLIS, false);
        duel.out.float(FloatingText::labeled(
            FloatingTextKind::Buff,
            Side::Player,
            BuffKind::Berserk.as_ref(),
        ));
        duel.out.log("Rage takes over: berserk!");
    }
}
