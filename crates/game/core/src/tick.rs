//! Tick driver: advances simulated time by one fixed step.
//!
//! The driver is a pure function of both combatants and the remaining
//! cooldowns. Ledger changes and damage-over-time come back as an
//! [`ActionOutcome`] so the controller applies ticks and actions the same way.

use crate::combat::{ActionOutcome, FloatingText, FloatingTextKind, OutcomeBuilder, Side};
use crate::config::GameConfig;
use crate::ledger::{BuffLedger, StatusLedger, StatusTick};
use crate::state::{Combatant, OpponentState, PlayerState};
use crate::stats::DerivedStats;

/// Remaining cooldowns in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownTimers {
    pub class_skill_millis: u32,
    pub weapon_art_millis: u32,
}

impl CooldownTimers {
    #[must_use]
    pub fn elapsed(self, dt_millis: u32) -> Self {
        Self {
            class_skill_millis: self.class_skill_millis.saturating_sub(dt_millis),
            weapon_art_millis: self.weapon_art_millis.saturating_sub(dt_millis),
        }
    }

    pub fn class_skill_ready(&self) -> bool {
        self.class_skill_millis == 0
    }

    pub fn weapon_art_ready(&self) -> bool {
        self.weapon_art_millis == 0
    }
}

/// What one tick produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub player_gauge_delta: f64,
    pub opponent_gauge_delta: f64,
    /// Cooldowns after this tick.
    pub cooldowns: CooldownTimers,
    /// Ledger and DoT changes, shaped like any action outcome.
    pub outcome: ActionOutcome,
}

/// Fixed-step time source for one encounter.
#[derive(Clone, Copy, Debug)]
pub struct TickDriver<'a> {
    config: &'a GameConfig,
}

impl<'a> TickDriver<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn dt_millis(&self) -> u32 {
        self.config.tick_millis
    }

    /// Advances both combatants by one tick.
    ///
    /// # Order
    ///
    /// ```text
    /// for each side:
    ///     status tick (duration, DoT pulse → hp)
    ///     buff tick   (duration, speed multiplier)
    ///     gauge delta = blocked ? 0 : speed × dt_s × multiplier
    /// cooldowns -= dt
    /// ```
    ///
    /// Blocking is checked after the ledgers advance, so a stun that expires
    /// this tick no longer holds the gauge. Player DoT uses derived max health
    /// and ignores the shield.
    pub fn tick(
        &self,
        player: &PlayerState,
        opponent: &OpponentState,
        stats: &DerivedStats,
        cooldowns: CooldownTimers,
    ) -> TickReport {
        let dt = self.config.tick_millis;
        let dt_seconds = self.config.tick_seconds();
        let mut out = OutcomeBuilder::new();

        let mut next_player = player.clone();
        let player_speed = self.advance(
            &mut next_player.statuses,
            &mut next_player.buffs,
            &mut next_player.hp,
            stats.max_hp,
            &player.name,
            Side::Player,
            &mut out,
        );
        let player_gauge_delta = if next_player.is_action_blocked() {
            0.0
        } else {
            f64::from(stats.speed) * dt_seconds * player_speed
        };

        let mut next_opponent = opponent.clone();
        let opponent_speed = self.advance(
            &mut next_opponent.statuses,
            &mut next_opponent.buffs,
            &mut next_opponent.hp,
            opponent.max_hp,
            &opponent.name,
            Side::Opponent,
            &mut out,
        );
        let opponent_gauge_delta = if next_opponent.is_action_blocked() {
            0.0
        } else {
            f64::from(opponent.speed) * dt_seconds * opponent_speed
        };

        TickReport {
            player_gauge_delta,
            opponent_gauge_delta,
            cooldowns: cooldowns.elapsed(dt),
            outcome: out.finish(player, &next_player, opponent, &next_opponent),
        }
    }

    /// Ticks one side's ledgers. Returns the gauge speed multiplier.
    #[allow(clippy::too_many_arguments)]
    fn advance(
        &self,
        statuses: &mut StatusLedger,
        buffs: &mut BuffLedger,
        hp: &mut u32,
        max_hp: u32,
        name: &str,
        side: Side,
        out: &mut OutcomeBuilder,
    ) -> f64 {
        let StatusTick { pulses, expired } =
            statuses.tick(self.config.tick_millis, self.config.dot_interval_millis, max_hp);
        for pulse in pulses.into_iter().filter(|pulse| pulse.damage > 0) {
            let lost = pulse.damage.min(*hp);
            *hp -= lost;
            out.float(FloatingText::amount(FloatingTextKind::Damage, side, pulse.damage));
            out.log(format!("{name} suffers {} {} damage.", pulse.damage, pulse.kind));
        }
        for kind in expired {
            out.log(format!("{kind} on {name} wears off."));
        }
        buffs.tick(self.config.tick_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{BuffKind, StatusKind};
    use crate::resolve::fixtures::{bare_player, stats};

    fn run_ticks(
        driver: &TickDriver<'_>,
        player: &mut PlayerState,
        opponent: &mut OpponentState,
        stats: &DerivedStats,
        ticks: usize,
    ) -> (f64, f64) {
        let mut gauges = (0.0, 0.0);
        for _ in 0..ticks {
            let report = driver.tick(player, opponent, stats, CooldownTimers::default());
            report.outcome.player.apply_to(player);
            report.outcome.opponent.apply_to(opponent);
            gauges.0 += report.player_gauge_delta;
            gauges.1 += report.opponent_gauge_delta;
        }
        gauges
    }

    #[test]
    fn gauge_fills_at_speed_per_second() {
        let config = GameConfig::default();
        let driver = TickDriver::new(&config);
        let player = bare_player(100);
        let opponent = OpponentState::with_stats("wolf", 50, 5, 0, 40);
        let report = driver.tick(&player, &opponent, &stats(10, 0, 100), CooldownTimers::default());
        // 20 × 0.1 and 40 × 0.1
        assert!((report.player_gauge_delta - 2.0).abs() < 1e-9);
        assert!((report.opponent_gauge_delta - 4.0).abs() < 1e-9);
        assert!(report.outcome.is_noop());
    }

    #[test]
    fn blocked_side_gains_nothing_until_stun_expires() {
        let config = GameConfig::default();
        let driver = TickDriver::new(&config);
        let mut player = bare_player(100);
        let mut opponent = OpponentState::with_stats("wolf", 50, 5, 0, 10);
        opponent.statuses.apply(StatusKind::Stun, None);
        let derived = stats(10, 0, 100);

        let (_, stunned) = run_ticks(&driver, &mut player, &mut opponent, &derived, 9);
        assert!(stunned.abs() < 1e-9);
        // the stun lapses during the tenth tick
        let (_, freed) = run_ticks(&driver, &mut player, &mut opponent, &derived, 1);
        assert!((freed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn haste_multiplies_gauge_and_cooldowns_floor_at_zero() {
        let config = GameConfig::default();
        let driver = TickDriver::new(&config);
        let mut player = bare_player(100);
        player.buffs.apply(BuffKind::Haste, 4_000, false);
        let opponent = OpponentState::with_stats("wolf", 50, 5, 0, 10);
        let cooldowns = CooldownTimers {
            class_skill_millis: 50,
            weapon_art_millis: 1_000,
        };
        let report = driver.tick(&player, &opponent, &stats(10, 0, 100), cooldowns);
        assert!((report.player_gauge_delta - 3.0).abs() < 1e-9);
        assert_eq!(report.cooldowns.class_skill_millis, 0);
        assert_eq!(report.cooldowns.weapon_art_millis, 900);
        assert!(report.cooldowns.class_skill_ready());
    }

    #[test]
    fn player_poison_pulses_against_derived_max_hp_through_shield() {
        let config = GameConfig::default();
        let driver = TickDriver::new(&config);
        let mut player = bare_player(100);
        player.shield = 50;
        player.statuses.apply(StatusKind::Poison, None);
        let mut opponent = OpponentState::with_stats("wolf", 50, 5, 0, 10);

        run_ticks(&driver, &mut player, &mut opponent, &stats(10, 0, 300), 10);
        // floor(300 × 0.02)
        assert_eq!(player.hp, 94);
        assert_eq!(player.shield, 50);
    }

    #[test]
    fn lethal_dot_reports_death() {
        let config = GameConfig::default();
        let driver = TickDriver::new(&config);
        let player = bare_player(100);
        let mut opponent = OpponentState::with_stats("wolf", 2, 5, 0, 10);
        opponent.statuses.apply(StatusKind::Burn, None);
        for _ in 0..9 {
            opponent.statuses.tick(100, 1_000, opponent.max_hp);
        }
        let report = driver.tick(&player, &opponent, &stats(10, 0, 100), CooldownTimers::default());
        // floor(2 × 0.04) = 0: burn never kills a 2 hp wolf
        assert!(!report.outcome.opponent_died);

        let mut ogre = OpponentState::with_stats("ogre", 1_000, 5, 0, 10);
        ogre.hp = 30;
        ogre.statuses.apply(StatusKind::Burn, None);
        for _ in 0..9 {
            ogre.statuses.tick(100, 1_000, ogre.max_hp);
        }
        let report = driver.tick(&player, &ogre, &stats(10, 0, 100), CooldownTimers::default());
        assert_eq!(report.outcome.opponent.hp, Some(0));
        assert!(report.outcome.opponent_died);
    }
}
