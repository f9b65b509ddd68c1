//! Timed status effects and buffs.
//!
//! Both ledgers hold at most one entry per kind; re-application merges into
//! the existing entry. Stack caps, durations and expiry are enforced here at
//! the point of mutation so callers never see an out-of-range entry.
mod buff;
mod status;

pub use buff::{Buff, BuffKind, BuffLedger, BuffModifiers};
pub use status::{DotPulse, StatusEffect, StatusKind, StatusLedger, StatusTick};
