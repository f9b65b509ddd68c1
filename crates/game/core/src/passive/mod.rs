//! Affix passives.
//!
//! Passive effects come in two flavors:
//!
//! - **Static** effects are folded into stats or read directly by resolvers
//!   (crit chance, dodge, max might, execute, immunities, first strike).
//! - **Reactive** effects are [`PassiveHandler`]s kept in a
//!   [`PassiveRegistry`]. Resolvers run a whole phase at once, so adding an
//!   on-hit or struck affix never touches resolver code.

mod effect;
mod handlers;
mod registry;

pub use effect::PassiveEffect;
pub use handlers::{
    BerserkOnHit, FalconBlitz, LifeSteal, StatusOnHit, Thorns, standard_handlers,
};
pub use registry::{PassiveHandler, PassiveRegistry};

/// When a reactive passive fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PassivePhase {
    /// After each basic-attack hit that leaves the opponent alive.
    OnHit,
    /// After an opponent attack that leaves the player alive.
    OnStruck,
}
