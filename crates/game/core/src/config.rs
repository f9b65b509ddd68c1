/// Combat configuration constants and tunable parameters.
///
/// Durations are whole milliseconds so repeated tick decrements never drift.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Simulated time advanced by one tick.
    pub tick_millis: u32,
    /// Interval between damage-over-time pulses.
    pub dot_interval_millis: u32,
    /// Player gauge at encounter start (before `first_strike`).
    pub opening_gauge: f64,
    /// Success probability of a flee attempt.
    pub flee_chance: f64,
    /// Fraction of max health restored by one potion.
    pub potion_heal_ratio: f64,
    /// Fallback cooldown for class skills that do not declare one.
    pub class_skill_cooldown_millis: u32,
    /// Pre-hit health fraction that must be exceeded for a death save.
    pub death_save_threshold: f64,
    /// Health fraction at which a tank opponent fortifies.
    pub tank_fortify_threshold: f64,
    /// Health fraction at which a boss opponent goes berserk.
    pub boss_berserk_threshold: f64,
    /// Target health fraction below which `execute_dmg` applies.
    pub execute_threshold: f64,
    /// Duration of the haste a rusher opens with.
    pub rusher_haste_millis: u32,
    /// Stacks of the haste a rusher opens with.
    pub rusher_haste_stacks: u8,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// One entry per status kind.
    pub const MAX_STATUS_EFFECTS: usize = 5;
    /// One entry per buff kind.
    pub const MAX_BUFFS: usize = 7;
    pub const MAX_REFINE_LEVEL: u8 = 9;
    pub const GAUGE_FULL: f64 = 100.0;
    /// Duration used for buffs meant to last until consumed or the encounter ends.
    pub const PERSISTENT_MILLIS: u32 = 999_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_MILLIS: u32 = 100;
    pub const DEFAULT_DOT_INTERVAL_MILLIS: u32 = 1_000;
    pub const DEFAULT_OPENING_GAUGE: f64 = 30.0;
    pub const DEFAULT_FLEE_CHANCE: f64 = 0.6;
    pub const DEFAULT_POTION_HEAL_RATIO: f64 = 0.35;
    pub const DEFAULT_CLASS_SKILL_COOLDOWN_MILLIS: u32 = 5_000;

    pub fn new() -> Self {
        Self {
            tick_millis: Self::DEFAULT_TICK_MILLIS,
            dot_interval_millis: Self::DEFAULT_DOT_INTERVAL_MILLIS,
            opening_gauge: Self::DEFAULT_OPENING_GAUGE,
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            potion_heal_ratio: Self::DEFAULT_POTION_HEAL_RATIO,
            class_skill_cooldown_millis: Self::DEFAULT_CLASS_SKILL_COOLDOWN_MILLIS,
            death_save_threshold: 0.5,
            tank_fortify_threshold: 0.3,
            boss_berserk_threshold: 0.25,
            execute_threshold: 0.3,
            rusher_haste_millis: 4_000,
            rusher_haste_stacks: 4,
        }
    }

    /// Tick length in seconds, used for gauge fill.
    pub fn tick_seconds(&self) -> f64 {
        f64::from(self.tick_millis) / 1_000.0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
