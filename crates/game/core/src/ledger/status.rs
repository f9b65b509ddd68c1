//! Status effect ledger.
//!
//! Lifecycle per kind: **absent → active(stacks, remaining) → absent**.
//! Damage-over-time kinds pulse once per DoT interval; action-blocking kinds
//! (stun, frozen) never stack and only refresh.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Elemental and control statuses.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusKind {
    Poison,
    Burn,
    Stun,
    Frozen,
    Bleed,
}

impl StatusKind {
    pub const fn stack_cap(self) -> u8 {
        match self {
            Self::Poison => 10,
            Self::Burn => 3,
            Self::Bleed => 5,
            Self::Stun | Self::Frozen => 1,
        }
    }

    pub const fn default_millis(self) -> u32 {
        match self {
            Self::Stun => 1_000,
            Self::Frozen => 2_000,
            Self::Poison | Self::Burn | Self::Bleed => 4_000,
        }
    }

    /// Fraction of max health dealt per stack on each pulse.
    pub const fn dot_ratio(self) -> Option<f64> {
        match self {
            Self::Poison | Self::Bleed => Some(0.02),
            Self::Burn => Some(0.04),
            Self::Stun | Self::Frozen => None,
        }
    }

    pub const fn blocks_action(self) -> bool {
        matches!(self, Self::Stun | Self::Frozen)
    }

    pub const fn stacks(self) -> bool {
        self.stack_cap() > 1
    }
}

/// A single active status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub stacks: u8,
    pub remaining_millis: u32,
    /// Time accumulated toward the next DoT pulse.
    pub dot_timer_millis: u32,
}

impl StatusEffect {
    /// `floor(max_hp × ratio × stacks)`, or 0 for non-DoT kinds.
    pub fn dot_damage(&self, max_hp: u32) -> u32 {
        self.kind
            .dot_ratio()
            .map(|ratio| (f64::from(max_hp) * ratio * f64::from(self.stacks)).floor() as u32)
            .unwrap_or(0)
    }
}

/// One damage-over-time pulse emitted during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotPulse {
    pub kind: StatusKind,
    pub damage: u32,
}

/// Result of advancing a ledger by one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTick {
    pub pulses: Vec<DotPulse>,
    pub expired: Vec<StatusKind>,
}

impl StatusTick {
    pub fn damage(&self) -> u32 {
        self.pulses
            .iter()
            .fold(0u32, |total, pulse| total.saturating_add(pulse.damage))
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty() && self.expired.is_empty()
    }
}

/// Active statuses on one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLedger {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusLedger {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|effect| effect.kind == kind)
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Stack count of `kind`, 0 when absent.
    pub fn stacks(&self, kind: StatusKind) -> u8 {
        self.get(kind).map_or(0, |effect| effect.stacks)
    }

    /// True while a stun or frozen entry is active.
    pub fn is_action_blocked(&self) -> bool {
        self.effects.iter().any(|effect| effect.kind.blocks_action())
    }

    /// Applies `kind` at full duration.
    ///
    /// A new entry starts at 1 stack with `custom_millis` or the kind's default
    /// duration. An existing entry has its duration reset to that value and,
    /// for stacking kinds, gains one stack up to the cap.
    pub fn apply(&mut self, kind: StatusKind, custom_millis: Option<u32>) -> StatusEffect {
        self.apply_with_resistance(kind, custom_millis, false)
    }

    /// Applies `kind`, halving the duration when `halved` is set.
    ///
    /// This is the resistance entry point used against boss and elite opponents.
    pub fn apply_with_resistance(
        &mut self,
        kind: StatusKind,
        custom_millis: Option<u32>,
        halved: bool,
    ) -> StatusEffect {
        let base = custom_millis.unwrap_or(kind.default_millis());
        let duration = if halved { base / 2 } else { base };

        if let Some(existing) = self.effects.iter_mut().find(|effect| effect.kind == kind) {
            existing.remaining_millis = duration;
            if kind.stacks() {
                existing.stacks = existing.stacks.saturating_add(1).min(kind.stack_cap());
            }
            return *existing;
        }

        let effect = StatusEffect {
            kind,
            stacks: 1,
            remaining_millis: duration,
            dot_timer_millis: 0,
        };
        // One slot per kind, so the ledger never overflows.
        if duration > 0 && !self.effects.is_full() {
            self.effects.push(effect);
        }
        effect
    }

    /// Removes `kind` immediately, returning the removed entry.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|effect| effect.kind == kind)?;
        Some(self.effects.remove(index))
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Advances every entry by `dt_millis`.
    ///
    /// # Algorithm
    ///
    /// ```text
    /// for each entry:
    ///     remaining -= dt
    ///     if DoT: timer += dt; if timer >= interval { timer = 0; pulse(floor(max_hp × ratio × stacks)) }
    /// drop entries with remaining == 0
    /// ```
    ///
    /// An entry that expires on this tick still pulses if its timer completes.
    pub fn tick(&mut self, dt_millis: u32, dot_interval_millis: u32, max_hp: u32) -> StatusTick {
        let mut report = StatusTick::default();

        for effect in self.effects.iter_mut() {
            effect.remaining_millis = effect.remaining_millis.saturating_sub(dt_millis);

            if effect.kind.dot_ratio().is_some() {
                effect.dot_timer_millis = effect.dot_timer_millis.saturating_add(dt_millis);
                if effect.dot_timer_millis >= dot_interval_millis {
                    effect.dot_timer_millis = 0;
                    report.pulses.push(DotPulse {
                        kind: effect.kind,
                        damage: effect.dot_damage(max_hp),
                    });
                }
            }

            if effect.remaining_millis == 0 {
                report.expired.push(effect.kind);
            }
        }

        self.effects.retain(|effect| effect.remaining_millis > 0);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poison_caps_at_ten_stacks_and_resets_duration() {
        let mut ledger = StatusLedger::empty();
        for _ in 0..20 {
            let effect = ledger.apply(StatusKind::Poison, None);
            assert!(effect.stacks <= 10);
            assert_eq!(effect.remaining_millis, 4_000);
        }
        assert_eq!(ledger.stacks(StatusKind::Poison), 10);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn burn_and_bleed_caps() {
        let mut ledger = StatusLedger::empty();
        for _ in 0..10 {
            ledger.apply(StatusKind::Burn, None);
            ledger.apply(StatusKind::Bleed, None);
        }
        assert_eq!(ledger.stacks(StatusKind::Burn), 3);
        assert_eq!(ledger.stacks(StatusKind::Bleed), 5);
    }

    #[test]
    fn stun_refreshes_without_stacking() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusKind::Stun, None);
        ledger.tick(100, 1_000, 100);
        let refreshed = ledger.apply(StatusKind::Stun, None);
        assert_eq!(refreshed.stacks, 1);
        assert_eq!(refreshed.remaining_millis, 1_000);
    }

    #[test]
    fn default_durations_by_kind() {
        let mut ledger = StatusLedger::empty();
        assert_eq!(ledger.apply(StatusKind::Frozen, None).remaining_millis, 2_000);
        assert_eq!(ledger.apply(StatusKind::Stun, None).remaining_millis, 1_000);
        assert_eq!(ledger.apply(StatusKind::Burn, None).remaining_millis, 4_000);
        assert_eq!(
            ledger.apply(StatusKind::Poison, Some(6_000)).remaining_millis,
            6_000
        );
    }

    #[test]
    fn resistance_halves_duration() {
        let mut ledger = StatusLedger::empty();
        let frozen = ledger.apply_with_resistance(StatusKind::Frozen, None, true);
        assert_eq!(frozen.remaining_millis, 1_000);
        let stun = ledger.apply_with_resistance(StatusKind::Stun, Some(400), true);
        assert_eq!(stun.remaining_millis, 200);
    }

    #[test]
    fn blocking_statuses_block_actions() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusKind::Poison, None);
        assert!(!ledger.is_action_blocked());
        ledger.apply(StatusKind::Frozen, None);
        assert!(ledger.is_action_blocked());
        ledger.remove(StatusKind::Frozen);
        assert!(!ledger.is_action_blocked());
    }

    #[test]
    fn dot_pulses_once_per_second() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusKind::Burn, None);
        ledger.apply(StatusKind::Burn, None);

        let mut pulses = Vec::new();
        for _ in 0..10 {
            let tick = ledger.tick(100, 1_000, 200);
            pulses.extend(tick.pulses);
        }
        // floor(200 × 0.04 × 2)
        assert_eq!(
            pulses,
            vec![DotPulse {
                kind: StatusKind::Burn,
                damage: 16
            }]
        );
    }

    #[test]
    fn full_duration_poison_pulses_four_times_then_expires() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusKind::Poison, None);

        let mut damage = 0;
        let mut expired = Vec::new();
        for _ in 0..40 {
            let tick = ledger.tick(100, 1_000, 100);
            damage += tick.damage();
            expired.extend(tick.expired);
        }
        assert_eq!(damage, 8);
        assert_eq!(expired, vec![StatusKind::Poison]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn stun_does_not_pulse() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusKind::Stun, None);
        let tick = ledger.tick(1_000, 1_000, 100);
        assert_eq!(tick.damage(), 0);
        assert_eq!(tick.expired, vec![StatusKind::Stun]);
    }
}
