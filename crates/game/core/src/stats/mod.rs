//! Stat aggregation.
//!
//! # Architecture
//!
//! ```text
//! [ Base Attributes ] + [ Loadout bonuses (affixes, armor built-ins) ]
//!      ↓
//! [ Soft-cap correction per attribute ]
//!      ↓
//! [ Derived stats: atk, matk, def, speed, max hp/shield, crit, dodge ]
//! ```
//!
//! Everything here is a pure function of the player and the resolved
//! [`Loadout`]. Opponents carry flat stats and skip aggregation.

pub mod curve;
pub mod derived;
pub mod loadout;

pub use curve::{correction, int_matk_bonus, refined, str_atk_bonus};
pub use derived::{DerivedStats, clamp_dodge, derive_stats};
pub use loadout::{Loadout, Stacked};
