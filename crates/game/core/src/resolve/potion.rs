//! Potions.

use super::Combat;
use crate::combat::damage::floor_u32;
use crate::combat::{ActionOutcome, FloatingText, FloatingTextKind, OutcomeBuilder, Side};

/// Drinks a potion: heals `floor(max_hp × 0.35)` capped at max health.
///
/// With no charges left the outcome is a no-op. No randomness is involved.
pub fn use_potion(combat: Combat<'_>) -> ActionOutcome {
    if combat.player.potions == 0 {
        return ActionOutcome::noop("No potions left.");
    }

    let max_hp = combat.stats.max_hp;
    let heal = floor_u32(f64::from(max_hp) * combat.config.potion_heal_ratio);
    let mut player = combat.player.clone();
    player.potions -= 1;
    player.hp = player.hp.saturating_add(heal).min(max_hp);

    let mut out = OutcomeBuilder::new();
    out.float(FloatingText::amount(FloatingTextKind::Heal, Side::Player, heal));
    out.log(format!("{} drinks a potion and recovers {heal} HP.", player.name));
    out.finish(combat.player, &player, combat.opponent, combat.opponent)
}
