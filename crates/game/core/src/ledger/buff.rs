//! Buff ledger.
//!
//! Duration buffs (haste, morale, fortify, berserk) modify multipliers until
//! they lapse. Consumable stances (double strike, evasion, counter) are
//! removed through [`BuffLedger::consume`] the moment they alter an action.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

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
pub enum BuffKind {
    DoubleStrike,
    EvasionStance,
    Haste,
    CounterStance,
    Morale,
    Fortify,
    Berserk,
}

impl BuffKind {
    pub const fn stack_cap(self) -> u8 {
        match self {
            Self::Morale | Self::Fortify => 3,
            Self::Berserk => 1,
            Self::DoubleStrike
            | Self::EvasionStance
            | Self::Haste
            | Self::CounterStance => 5,
        }
    }

    /// Per-tick gauge multiplier contributed while active.
    pub const fn tick_speed_factor(self) -> f64 {
        match self {
            Self::Haste => 1.5,
            Self::Berserk => 1.25,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub kind: BuffKind,
    pub stacks: u8,
    pub remaining_millis: u32,
    pub consume_on_trigger: bool,
}

/// Attack, defense and speed multipliers granted by active buffs.
///
/// ```text
/// morale:  atk += 0.30 × stacks
/// fortify: def += 0.30 × stacks
/// berserk: atk += 0.25, speed += 0.25, def ×= 0.5
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffModifiers {
    pub atk_mult: f64,
    pub def_mult: f64,
    pub speed_mult: f64,
}

impl Default for BuffModifiers {
    fn default() -> Self {
        Self {
            atk_mult: 1.0,
            def_mult: 1.0,
            speed_mult: 1.0,
        }
    }
}

/// Active buffs on one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffLedger {
    buffs: ArrayVec<Buff, { GameConfig::MAX_BUFFS }>,
}

impl BuffLedger {
    pub fn empty() -> Self {
        Self {
            buffs: ArrayVec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.buffs.iter()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }

    pub fn get(&self, kind: BuffKind) -> Option<&Buff> {
        self.buffs.iter().find(|buff| buff.kind == kind)
    }

    pub fn has(&self, kind: BuffKind) -> bool {
        self.get(kind).is_some()
    }

    /// Applies or refreshes `kind`.
    ///
    /// A refresh resets the duration, adds a stack up to the kind's cap and
    /// keeps the existing consume flag.
    pub fn apply(&mut self, kind: BuffKind, duration_millis: u32, consumable: bool) -> Buff {
        if let Some(existing) = self.buffs.iter_mut().find(|buff| buff.kind == kind) {
            existing.remaining_millis = duration_millis;
            existing.stacks = existing.stacks.saturating_add(1).min(kind.stack_cap());
            return *existing;
        }

        let buff = Buff {
            kind,
            stacks: 1,
            remaining_millis: duration_millis,
            consume_on_trigger: consumable,
        };
        if duration_millis > 0 && !self.buffs.is_full() {
            self.buffs.push(buff);
        }
        buff
    }

    /// Removes `kind` if it is consumable. Returns whether anything was consumed.
    pub fn consume(&mut self, kind: BuffKind) -> bool {
        match self
            .buffs
            .iter()
            .position(|buff| buff.kind == kind && buff.consume_on_trigger)
        {
            Some(index) => {
                self.buffs.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn modifiers(&self) -> BuffModifiers {
        let mut mods = BuffModifiers::default();
        for buff in &self.buffs {
            match buff.kind {
                BuffKind::Morale => mods.atk_mult += 0.3 * f64::from(buff.stacks),
                BuffKind::Fortify => mods.def_mult += 0.3 * f64::from(buff.stacks),
                BuffKind::Berserk => {
                    mods.atk_mult += 0.25;
                    mods.speed_mult += 0.25;
                    mods.def_mult *= 0.5;
                }
                _ => {}
            }
        }
        mods
    }

    /// Advances every buff by `dt_millis` and drops lapsed ones.
    ///
    /// Returns the gauge speed multiplier for this tick, computed from every
    /// buff active at the start of the tick (haste ×1.5, berserk ×1.25).
    pub fn tick(&mut self, dt_millis: u32) -> f64 {
        let mut speed = 1.0;
        for buff in self.buffs.iter_mut() {
            buff.remaining_millis = buff.remaining_millis.saturating_sub(dt_millis);
            speed *= buff.kind.tick_speed_factor();
        }
        self.buffs.retain(|buff| buff.remaining_millis > 0);
        speed
    }
}
