//! Passive handler registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::{PassiveEffect, PassivePhase};
use crate::resolve::Duel;
use crate::stats::Stacked;

/// A reactive passive effect.
///
/// Handlers are small, pure functions of the working [`Duel`]. They only run
/// when at least one equipped affix grants their effect, and they receive the
/// stacked value across every slot.
pub trait PassiveHandler: Send + Sync {
    fn effect(&self) -> PassiveEffect;

    fn phase(&self) -> PassivePhase;

    /// Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    /// `damage` is the hit that triggered the phase.
    fn apply(&self, duel: &mut Duel<'_>, stacked: Stacked, damage: u32);
}

/// Handlers grouped by phase and sorted by priority.
///
/// Adding a reactive affix means registering one more handler; resolvers
/// never branch on individual effect ids.
#[derive(Clone)]
pub struct PassiveRegistry {
    on_hit: Arc<[Arc<dyn PassiveHandler>]>,
    on_struck: Arc<[Arc<dyn PassiveHandler>]>,
    lookup: HashMap<PassiveEffect, Arc<dyn PassiveHandler>>,
}

impl PassiveRegistry {
    pub fn new(handlers: Vec<Arc<dyn PassiveHandler>>) -> Self {
        let mut on_hit: Vec<_> = handlers
            .iter()
            .filter(|handler| handler.phase() == PassivePhase::OnHit)
            .cloned()
            .collect();
        let mut on_struck: Vec<_> = handlers
            .iter()
            .filter(|handler| handler.phase() == PassivePhase::OnStruck)
            .cloned()
            .collect();
        on_hit.sort_by_key(|handler| handler.priority());
        on_struck.sort_by_key(|handler| handler.priority());

        let lookup = handlers
            .into_iter()
            .map(|handler| (handler.effect(), handler))
            .collect();

        Self {
            on_hit: on_hit.into(),
            on_struck: on_struck.into(),
            lookup,
        }
    }

    /// Registry holding the standard catalog.
    pub fn standard() -> Self {
        Self::new(super::handlers::standard_handlers())
    }

    /// Registry with no handlers: reactive affixes do nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Runs every handler of `phase` whose effect is equipped.
    ///
    /// On-hit handlers stop as soon as the opponent is dead. Struck handlers
    /// all run: the player survived the hit and self-targeted reactions still
    /// apply after a lethal reflection.
    pub fn run(&self, phase: PassivePhase, duel: &mut Duel<'_>, damage: u32) {
        let loadout = duel.loadout();
        for handler in self.handlers(phase) {
            if phase == PassivePhase::OnHit && !duel.opponent_alive() {
                break;
            }
            let stacked = loadout.stacked(handler.effect());
            if stacked.is_active() {
                handler.apply(duel, stacked, damage);
            }
        }
    }

    pub fn handlers(&self, phase: PassivePhase) -> impl Iterator<Item = &Arc<dyn PassiveHandler>> {
        match phase {
            PassivePhase::OnHit => self.on_hit.iter(),
            PassivePhase::OnStruck => self.on_struck.iter(),
        }
    }

    pub fn find(&self, effect: PassiveEffect) -> Option<&Arc<dyn PassiveHandler>> {
        self.lookup.get(&effect)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

impl Default for PassiveRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for PassiveRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names = |handlers: &[Arc<dyn PassiveHandler>]| {
            handlers
                .iter()
                .map(|handler| handler.effect())
                .collect::<Vec<_>>()
        };
        f.debug_struct("PassiveRegistry")
            .field("on_hit", &names(&self.on_hit))
            .field("on_struck", &names(&self.on_struck))
            .finish()
    }
}
