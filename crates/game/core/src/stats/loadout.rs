//! Resolved equipment: definitions and affixes looked up once per action.

use crate::env::{
    AffixDefinition, AffixKind, ArmorDefinition, ArmorEffect, AttributeKind, ItemOracle,
    OracleError, SkillOracle, WeaponCategory, WeaponDefinition, WeaponPassiveDefinition,
};
use crate::ledger::StatusKind;
use crate::passive::PassiveEffect;
use crate::state::{Attributes, ItemState, PlayerState};

use super::curve::refined;

/// Summed magnitude and number of contributing affixes for one passive effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stacked {
    pub value: f64,
    pub count: u32,
}

impl Stacked {
    pub fn is_active(&self) -> bool {
        self.count > 0
    }

    /// Summed value as a probability.
    pub fn chance(&self) -> f64 {
        self.value.clamp(0.0, 1.0)
    }
}

/// Everything the player has equipped, with every id already resolved.
///
/// Affixes are kept in weapon, armor, armor built-in order.
#[derive(Clone, Debug, Default)]
pub struct Loadout<'a> {
    weapon: Option<(&'a ItemState, &'a WeaponDefinition)>,
    armor: Option<(&'a ItemState, &'a ArmorDefinition)>,
    passive: Option<&'a WeaponPassiveDefinition>,
    affixes: Vec<&'a AffixDefinition>,
}

impl<'a> Loadout<'a> {
    /// Resolves the player's equipment against the content oracles.
    ///
    /// # Errors
    ///
    /// Any id that the oracles do not know is a data-integrity failure and is
    /// reported as an [`OracleError`].
    pub fn resolve(
        player: &'a PlayerState,
        items: &'a dyn ItemOracle,
        skills: &'a dyn SkillOracle,
    ) -> Result<Self, OracleError> {
        let mut loadout = Self::default();

        if let Some(state) = &player.weapon {
            let def = items
                .weapon(&state.id)
                .ok_or_else(|| OracleError::WeaponNotFound(state.id.clone()))?;
            if let Some(passive_id) = &def.passive {
                let passive = skills
                    .weapon_passive(passive_id)
                    .ok_or_else(|| OracleError::PassiveNotFound(passive_id.clone()))?;
                loadout.passive = Some(passive);
            }
            loadout.push_affixes(items, &state.affixes)?;
            loadout.weapon = Some((state, def));
        }

        if let Some(state) = &player.armor {
            let def = items
                .armor(&state.id)
                .ok_or_else(|| OracleError::ArmorNotFound(state.id.clone()))?;
            loadout.push_affixes(items, &state.affixes)?;
            loadout.push_affixes(items, &def.effect.built_in_affixes)?;
            loadout.armor = Some((state, def));
        }

        Ok(loadout)
    }

    fn push_affixes(&mut self, items: &'a dyn ItemOracle, ids: &[String]) -> Result<(), OracleError> {
        for id in ids {
            let affix = items
                .affix(id)
                .ok_or_else(|| OracleError::AffixNotFound(id.clone()))?;
            self.affixes.push(affix);
        }
        Ok(())
    }

    pub fn weapon(&self) -> Option<&'a WeaponDefinition> {
        self.weapon.map(|(_, def)| def)
    }

    pub fn weapon_category(&self) -> Option<WeaponCategory> {
        self.weapon().map(|def| def.category)
    }

    pub fn weapon_passive(&self) -> Option<&'a WeaponPassiveDefinition> {
        self.passive
    }

    pub fn armor(&self) -> Option<&'a ArmorDefinition> {
        self.armor.map(|(_, def)| def)
    }

    pub fn armor_effect(&self) -> Option<&'a ArmorEffect> {
        self.armor().map(|def| &def.effect)
    }

    /// Weapon attack after refinement, 0 when unarmed.
    pub fn refined_weapon_atk(&self) -> u32 {
        self.weapon
            .map_or(0, |(state, def)| refined(def.atk, state.refine_level))
    }

    /// Armor defense after refinement, 0 without armor.
    pub fn refined_armor_def(&self) -> u32 {
        self.armor
            .map_or(0, |(state, def)| refined(def.def, state.refine_level))
    }

    pub fn affixes(&self) -> impl Iterator<Item = &'a AffixDefinition> + '_ {
        self.affixes.iter().copied()
    }

    /// Individual magnitudes of every affix granting `effect`.
    pub fn values(&self, effect: PassiveEffect) -> impl Iterator<Item = f64> + '_ {
        self.affixes.iter().filter_map(move |affix| match affix.kind {
            AffixKind::Passive { effect: e, value } if e == effect => Some(value),
            _ => None,
        })
    }

    pub fn stacked(&self, effect: PassiveEffect) -> Stacked {
        self.values(effect).fold(Stacked::default(), |acc, value| Stacked {
            value: acc.value + value,
            count: acc.count + 1,
        })
    }

    pub fn is_immune(&self, status: StatusKind) -> bool {
        self.stacked(PassiveEffect::immunity_for(status)).is_active()
    }

    /// Flat attribute bonuses from stat affixes and the armor's built-in bonus.
    pub fn attribute_bonus(&self) -> Attributes {
        let mut bonus = self
            .armor_effect()
            .map_or_else(Attributes::default, |effect| effect.bonus);
        for affix in &self.affixes {
            if let AffixKind::Stat { attribute, value } = affix.kind {
                let slot = match attribute {
                    AttributeKind::Str => &mut bonus.strength,
                    AttributeKind::Agi => &mut bonus.agility,
                    AttributeKind::Vit => &mut bonus.vitality,
                    AttributeKind::Int => &mut bonus.intellect,
                };
                *slot = slot.saturating_add(value);
            }
        }
        bonus
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::{ClassSkillDefinition, RuneDefinition, WeaponArtDefinition};

    #[derive(Default)]
    struct Catalog {
        weapons: HashMap<String, WeaponDefinition>,
        armors: HashMap<String, ArmorDefinition>,
        affixes: HashMap<String, AffixDefinition>,
    }

    impl ItemOracle for Catalog {
        fn weapon(&self, id: &str) -> Option<&WeaponDefinition> {
            self.weapons.get(id)
        }
        fn armor(&self, id: &str) -> Option<&ArmorDefinition> {
            self.armors.get(id)
        }
        fn affix(&self, id: &str) -> Option<&AffixDefinition> {
            self.affixes.get(id)
        }
        fn rune(&self, _id: &str) -> Option<&RuneDefinition> {
            None
        }
    }

    struct NoSkills;

    impl SkillOracle for NoSkills {
        fn weapon_passive(&self, _id: &str) -> Option<&WeaponPassiveDefinition> {
            None
        }
        fn weapon_art(&self, _category: WeaponCategory) -> Option<&WeaponArtDefinition> {
            None
        }
        fn class_skill(&self, _id: &str) -> Option<&ClassSkillDefinition> {
            None
        }
    }

    fn affix(id: &str, kind: AffixKind) -> AffixDefinition {
        AffixDefinition {
            id: id.into(),
            name: id.into(),
            kind,
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.weapons.insert(
            "sword".into(),
            WeaponDefinition {
                id: "sword".into(),
                name: "Sword".into(),
                category: WeaponCategory::Sword,
                atk: 15,
                max_sockets: 2,
                passive: None,
            },
        );
        catalog.armors.insert(
            "plate".into(),
            ArmorDefinition {
                id: "plate".into(),
                name: "Plate".into(),
                def: 10,
                max_sockets: 1,
                effect: ArmorEffect {
                    bonus: Attributes::new(0, 0, 3, 0),
                    built_in_affixes: vec!["thorny".into()],
                    ..ArmorEffect::default()
                },
            },
        );
        for (id, kind) in [
            (
                "vampiric",
                AffixKind::Passive {
                    effect: PassiveEffect::LifeSteal,
                    value: 1.0,
                },
            ),
            (
                "thorny",
                AffixKind::Passive {
                    effect: PassiveEffect::Thorns,
                    value: 0.2,
                },
            ),
            (
                "mighty",
                AffixKind::Stat {
                    attribute: AttributeKind::Str,
                    value: 5,
                },
            ),
            (
                "venom_ward",
                AffixKind::Passive {
                    effect: PassiveEffect::PoisonImmune,
                    value: 1.0,
                },
            ),
        ] {
            catalog.affixes.insert(id.into(), affix(id, kind));
        }
        catalog
    }

    fn player() -> PlayerState {
        let mut player = PlayerState::from_class(
            "hero",
            &crate::env::ClassTemplate {
                id: "warrior".into(),
                name: "Warrior".into(),
                base_hp: 120,
                attributes: Attributes::new(5, 3, 6, 2),
                skill: "warrior_skill".into(),
                crit_bonus: 0.0,
                starting_weapon: None,
                starting_armor: None,
                starting_potions: 0,
                starting_gold: 0,
            },
            &catalog(),
        )
        .expect("class without starting gear");
        player.weapon = Some(
            ItemState::new("sword", 0)
                .with_affix("vampiric")
                .with_affix("mighty")
                .with_refine_level(3),
        );
        player.armor = Some(
            ItemState::new("plate", 0)
                .with_affix("vampiric")
                .with_affix("venom_ward"),
        );
        player
    }

    #[test]
    fn affixes_stack_across_slots() {
        let catalog = catalog();
        let player = player();
        let loadout = Loadout::resolve(&player, &catalog, &NoSkills).expect("valid loadout");

        let life_steal = loadout.stacked(PassiveEffect::LifeSteal);
        assert_eq!(life_steal.count, 2);
        assert!((life_steal.chance() - 1.0).abs() < 1e-9);
        assert_eq!(loadout.stacked(PassiveEffect::Thorns).count, 1);
        assert!(loadout.is_immune(StatusKind::Poison));
        assert!(!loadout.is_immune(StatusKind::Burn));
    }

    #[test]
    fn attribute_bonus_includes_armor_built_ins() {
        let catalog = catalog();
        let player = player();
        let loadout = Loadout::resolve(&player, &catalog, &NoSkills).expect("valid loadout");
        assert_eq!(loadout.attribute_bonus(), Attributes::new(5, 0, 3, 0));
        assert_eq!(loadout.refined_weapon_atk(), 19);
        assert_eq!(loadout.refined_armor_def(), 10);
    }

    #[test]
    fn unknown_affix_fails_loudly() {
        let catalog = catalog();
        let mut player = player();
        player.weapon = Some(ItemState::new("sword", 0).with_affix("missing"));
        let err = Loadout::resolve(&player, &catalog, &NoSkills).unwrap_err();
        assert_eq!(err, OracleError::AffixNotFound("missing".into()));
    }
}
