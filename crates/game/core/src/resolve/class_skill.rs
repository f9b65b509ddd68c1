//! Class skills.

use super::weapon_art::skill_amplified;
use super::{Combat, Duel, bleed_on_action};
use crate::combat::damage::floor_u32;
use crate::combat::{ActionOutcome, FloatingText, FloatingTextKind, Side, amplify_unmitigated};
use crate::env::{ClassSkillDefinition, Rolls};
use crate::ledger::StatusKind;
use crate::state::Combatant;

/// Resolves the player's class skill.
///
/// Skills are data: the damage is a weighted sum of the player's stats and
/// an optional health sacrifice, followed by the skill's status list. The
/// cooldown is the skill's own or the configured default.
pub fn class_skill(
    combat: Combat<'_>,
    skill: &ClassSkillDefinition,
    rolls: Rolls<'_>,
) -> ActionOutcome {
    if combat.player.is_action_blocked() {
        return ActionOutcome::noop(format!("{} cannot act!", combat.player.name));
    }

    let mut duel = Duel::begin(combat, rolls);
    let cooldown = skill
        .cooldown_millis
        .unwrap_or(duel.config().class_skill_cooldown_millis);
    duel.out.class_skill_cooldown(cooldown);
    if bleed_on_action(&mut duel, Side::Player) {
        return duel.finish();
    }

    let hp_cost = floor_u32(f64::from(duel.player.hp) * skill.hp_cost_ratio);
    if hp_cost > 0 {
        duel.wound_player(hp_cost);
        duel.out
            .float(FloatingText::amount(FloatingTextKind::Damage, Side::Player, hp_cost));
        duel.out
            .log(format!("{} sacrifices {hp_cost} health.", duel.player.name));
    }

    let stats = duel.stats();
    let base = floor_u32(
        f64::from(stats.atk) * skill.atk_ratio
            + f64::from(stats.matk) * skill.matk_ratio
            + f64::from(stats.def) * skill.def_ratio
            + f64::from(hp_cost) * skill.hp_cost_damage_ratio,
    );
    let amplified = skill_amplified(&duel, base);
    let frozen = duel.opponent.statuses.has(StatusKind::Frozen);
    let damage = amplify_unmitigated(
        amplified,
        duel.opponent.statuses.stacks(StatusKind::Burn),
        frozen,
    );
    if frozen {
        duel.opponent.statuses.remove(StatusKind::Frozen);
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Opponent, "shatter"));
        duel.out.log("The ice shatters for double damage!");
    }

    if skill.show_crit {
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Opponent, "crit"));
    }
    duel.damage_opponent(damage);
    duel.out
        .float(FloatingText::amount(FloatingTextKind::Critical, Side::Opponent, damage));
    duel.out
        .log(format!("{}! Dealt {damage} damage.", skill.name));
    duel.record_damage(damage);

    if duel.opponent_alive() {
        for status in &skill.statuses {
            duel.inflict(*status, None);
        }
    } else {
        duel.out.log(format!("{} is defeated!", duel.opponent.name));
    }

    if skill.opponent_gauge_pushback > 0.0 {
        duel.out.gauge(Side::Opponent, -skill.opponent_gauge_pushback);
    }
    duel.finish()
}
