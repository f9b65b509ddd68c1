//! Story script definitions.
//!
//! A script is a prioritized dialogue with a declarative trigger condition.
//! Matching is a pure predicate over the player and the narrative context;
//! choosing between matches is left to the registry that owns the scripts.

use battle_core::{
    DialogueLine, NarrativeContext, NarrativePhase, PlayerState, ScriptPayload,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryScript {
    pub id: String,
    /// Higher priorities are checked first.
    pub priority: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: ScriptCondition,
    pub lines: Vec<DialogueLine>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub set_flags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub force_return: bool,
}

impl StoryScript {
    pub fn matches(
        &self,
        player: &PlayerState,
        ctx: &NarrativeContext,
        phase: NarrativePhase,
    ) -> bool {
        self.condition.matches(player, ctx, phase)
    }

    /// Payload handed to the host when the script fires.
    pub fn payload(&self) -> ScriptPayload {
        ScriptPayload {
            id: self.id.clone(),
            lines: self.lines.clone(),
            set_flags: self.set_flags.clone(),
            force_return: self.force_return,
        }
    }
}

/// Every populated field must hold for the script to fire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptCondition {
    pub phase: Option<NarrativePhase>,
    pub location: Option<String>,
    pub class: Option<String>,
    pub min_depth: Option<u32>,
    pub min_max_depth: Option<u32>,
    pub flags_present: Vec<String>,
    pub flags_absent: Vec<String>,
}

impl ScriptCondition {
    pub fn matches(
        &self,
        player: &PlayerState,
        ctx: &NarrativeContext,
        phase: NarrativePhase,
    ) -> bool {
        self.phase.is_none_or(|wanted| wanted == phase)
            && self
                .location
                .as_deref()
                .is_none_or(|location| location == ctx.location)
            && self
                .class
                .as_deref()
                .is_none_or(|class| class == player.class_id)
            && self.min_depth.is_none_or(|depth| ctx.depth >= depth)
            && self.min_max_depth.is_none_or(|depth| ctx.max_depth >= depth)
            && self.flags_present.iter().all(|flag| player.has_flag(flag))
            && !self.flags_absent.iter().any(|flag| player.has_flag(flag))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use battle_core::{
        Attributes, BuffLedger, Inventory, StatusLedger,
    };

    use super::*;

    fn knight() -> PlayerState {
        PlayerState {
            name: "Brom".into(),
            class_id: "knight".into(),
            attributes: Attributes::new(5, 3, 6, 2),
            base_max_hp: 120,
            hp: 120,
            shield: 0,
            weapon: None,
            armor: None,
            statuses: StatusLedger::empty(),
            buffs: BuffLedger::empty(),
            potions: 3,
            max_damage: 0,
            gold: 0,
            inventory: Inventory::default(),
            flags: BTreeSet::new(),
        }
    }

    #[test]
    fn empty_condition_always_matches() {
        let ctx = NarrativeContext::new("camp", 0, 0);
        assert!(ScriptCondition::default().matches(&knight(), &ctx, NarrativePhase::Camp));
    }

    #[test]
    fn every_field_must_hold() {
        let condition = ScriptCondition {
            phase: Some(NarrativePhase::Camp),
            class: Some("knight".into()),
            min_max_depth: Some(10),
            flags_absent: vec!["met_elder".into()],
            ..ScriptCondition::default()
        };
        let mut player = knight();
        let deep = NarrativeContext::new("camp", 3, 12);
        let shallow = NarrativeContext::new("camp", 3, 9);

        assert!(condition.matches(&player, &deep, NarrativePhase::Camp));
        assert!(!condition.matches(&player, &shallow, NarrativePhase::Camp));
        assert!(!condition.matches(&player, &deep, NarrativePhase::AfterBattle));

        player.flags.insert("met_elder".into());
        assert!(!condition.matches(&player, &deep, NarrativePhase::Camp));

        player.flags.clear();
        player.class_id = "mage".into();
        assert!(!condition.matches(&player, &deep, NarrativePhase::Camp));
    }
}
