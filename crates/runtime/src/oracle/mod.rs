//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `battle-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`BattleEnv`] views on
//! demand. The data is immutable at runtime; dynamic state lives in the
//! encounter worker.
mod actors;
mod items;
mod skills;

use std::sync::Arc;

use battle_content::ContentBundle;
use battle_core::{
    BattleEnv, ItemOracle, MonsterTemplate, NarrativeOracle, OracleError, PcgRng,
    PlayerState,
};

pub use actors::ActorOracleImpl;
pub use items::ItemOracleImpl;
pub use skills::SkillOracleImpl;

use crate::narrative::ScriptRegistry;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) skills: Arc<SkillOracleImpl>,
    pub(crate) actors: Arc<ActorOracleImpl>,
    pub(crate) scripts: Arc<ScriptRegistry>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        items: Arc<ItemOracleImpl>,
        skills: Arc<SkillOracleImpl>,
        actors: Arc<ActorOracleImpl>,
        scripts: Arc<ScriptRegistry>,
    ) -> Self {
        Self {
            items,
            skills,
            actors,
            scripts,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds every oracle from validated content.
    pub fn from_bundle(bundle: &ContentBundle) -> Self {
        let mut actors = ActorOracleImpl::new();
        bundle.classes.iter().cloned().for_each(|c| actors.add_class(c));
        bundle.monsters.iter().cloned().for_each(|m| actors.add_monster(m));

        Self::new(
            Arc::new(ItemOracleImpl::from_catalog(&bundle.items, &bundle.affixes)),
            Arc::new(SkillOracleImpl::from_catalog(&bundle.skills)),
            Arc::new(actors),
            Arc::new(ScriptRegistry::new(bundle.story.clone())),
        )
    }

    /// Borrowed environment for battle-core calls.
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        BattleEnv::new(
            self.items.as_ref(),
            self.skills.as_ref(),
            self.actors.as_ref(),
            &self.rng,
        )
    }

    /// Creates a fresh character of `class_id` with its starting gear.
    ///
    /// # Errors
    ///
    /// Unknown class or starting equipment.
    pub fn new_player(
        &self,
        name: impl Into<String>,
        class_id: &str,
    ) -> Result<PlayerState, OracleError> {
        use battle_core::ActorOracle;

        let template = self
            .actors
            .class(class_id)
            .ok_or_else(|| OracleError::ClassNotFound(class_id.to_owned()))?;
        PlayerState::from_class(name, template, self.items.as_ref() as &dyn ItemOracle)
    }

    pub fn monster(&self, id: &str) -> Result<&MonsterTemplate, OracleError> {
        use battle_core::ActorOracle;

        self.actors
            .monster(id)
            .ok_or_else(|| OracleError::MonsterNotFound(id.to_owned()))
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn skills(&self) -> &SkillOracleImpl {
        &self.skills
    }

    pub fn actors(&self) -> &ActorOracleImpl {
        &self.actors
    }

    pub fn scripts(&self) -> &ScriptRegistry {
        &self.scripts
    }

    pub fn narrative(&self) -> &dyn NarrativeOracle {
        self.scripts.as_ref()
    }
}
