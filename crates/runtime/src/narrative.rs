//! Story script registry.
//!
//! Holds the loaded [`StoryScript`]s ordered by priority and answers
//! [`NarrativeOracle`] queries with the first script whose condition holds.
use battle_content::StoryScript;
use battle_core::{NarrativeContext, NarrativeOracle, NarrativePhase, PlayerState, ScriptPayload};

#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: Vec<StoryScript>,
}

impl ScriptRegistry {
    /// Orders scripts by descending priority; ties keep load order.
    pub fn new(mut scripts: Vec<StoryScript>) -> Self {
        scripts.sort_by_key(|script| std::cmp::Reverse(script.priority));
        Self { scripts }
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Script ids in evaluation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scripts.iter().map(|script| script.id.as_str())
    }
}

impl NarrativeOracle for ScriptRegistry {
    fn should_trigger(
        &self,
        player: &PlayerState,
        ctx: &NarrativeContext,
        phase: NarrativePhase,
    ) -> Option<ScriptPayload> {
        let script = self
            .scripts
            .iter()
            .find(|script| script.matches(player, ctx, phase))?;
        tracing::trace!(
            target: "runtime::narrative",
            script = %script.id,
            %phase,
            location = %ctx.location,
            "script matched"
        );
        Some(script.payload())
    }
}
