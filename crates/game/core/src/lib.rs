//! Deterministic real-time-tick combat rules shared by every host.
//!
//! `battle-core` owns the combat resolution engine: stat derivation, the
//! status and buff ledgers, damage mitigation, the action resolvers, the tick
//! driver and the encounter controller. Everything here is a pure function of
//! its inputs plus an [`env::RngOracle`]; hosts supply time and apply the
//! returned [`ActionOutcome`]s through [`Encounter`].
pub mod combat;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod forge;
pub mod ledger;
pub mod passive;
pub mod resolve;
pub mod state;
pub mod stats;
pub mod tick;

pub use combat::{
    ActionOutcome, Cooldowns, FloatingText, FloatingTextKind, OpponentPatch, OutcomeBuilder,
    OutcomeFlags, PlayerPatch, Side, calculate_damage,
};
pub use config::GameConfig;
pub use encounter::{
    DialogueLine, Encounter, EncounterError, EncounterPhase, EncounterSnapshot,
    NarrativeContext, NarrativeOracle, NarrativePhase, PlayerCommand, ScriptPayload,
};
pub use env::{
    ActorOracle, AffixDefinition, AffixKind, ArmorDefinition, ArmorEffect, ArtEffect,
    AttributeKind, BattleEnv, BuffChance, ClassSkillDefinition, ClassTemplate, FixedRng,
    ItemOracle, MonsterTemplate, OnHitTable, OracleError, PassiveMode, PassiveRider, PcgRng,
    RngOracle, Rolls, RuneDefinition, SkillOracle, StatusChance, WeaponArtDefinition,
    WeaponCategory, WeaponDefinition, WeaponPassiveDefinition, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use forge::{RefineQuote, Rejection, enchant, refine, refine_quote};
pub use ledger::{
    Buff, BuffKind, BuffLedger, BuffModifiers, DotPulse, StatusEffect, StatusKind,
    StatusLedger, StatusTick,
};
pub use passive::{PassiveEffect, PassiveHandler, PassivePhase, PassiveRegistry};
pub use resolve::Combat;
pub use state::{
    Attributes, Combatant, EquipSlot, Inventory, ItemState, OpponentRole, OpponentState,
    PlayerState,
};
pub use stats::{DerivedStats, Loadout, Stacked, derive_stats};
pub use tick::{CooldownTimers, TickDriver, TickReport};
