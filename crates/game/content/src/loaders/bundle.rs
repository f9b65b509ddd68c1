//! Loaded content with cross-reference validation.

use std::collections::HashSet;

use anyhow::{Context, bail, ensure};
use battle_core::{
    AffixDefinition, ClassTemplate, GameConfig, MonsterTemplate, WeaponCategory,
};

use crate::loaders::{ItemCatalog, LoadResult, MonsterCatalog, SkillCatalog};
use crate::story::StoryScript;

/// Everything in a data directory, ready to back the runtime oracles.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub classes: Vec<ClassTemplate>,
    pub monsters: MonsterCatalog,
    pub items: ItemCatalog,
    pub affixes: Vec<AffixDefinition>,
    pub skills: SkillCatalog,
    pub story: Vec<StoryScript>,
}

impl ContentBundle {
    pub fn class(&self, id: &str) -> Option<&ClassTemplate> {
        self.classes.iter().find(|class| class.id == id)
    }

    pub fn monster(&self, id: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    /// Checks that every id referenced by one table exists in another.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate id or dangling reference found.
    pub fn validate(&self) -> LoadResult<()> {
        let affixes = unique_ids("affix", self.affixes.iter().map(|a| a.id.as_str()))?;
        let passives = unique_ids("weapon passive", self.skills.passives.iter().map(|p| p.id.as_str()))?;
        let skills = unique_ids("class skill", self.skills.class_skills.iter().map(|s| s.id.as_str()))?;
        let weapons = unique_ids("weapon", self.items.weapons.iter().map(|w| w.id.as_str()))?;
        let armors = unique_ids("armor", self.items.armors.iter().map(|a| a.id.as_str()))?;
        unique_ids("rune", self.items.runes.iter().map(|r| r.id.as_str()))?;
        unique_ids("class", self.classes.iter().map(|c| c.id.as_str()))?;
        unique_ids("monster", self.monsters.iter().map(|m| m.id.as_str()))?;

        let mut arts: HashSet<WeaponCategory> = HashSet::new();
        for art in &self.skills.arts {
            ensure!(
                arts.insert(art.category),
                "weapon art '{}' duplicates the art for category '{}'",
                art.id,
                art.category
            );
        }

        for weapon in &self.items.weapons {
            if let Some(passive) = &weapon.passive {
                ensure!(
                    passives.contains(passive.as_str()),
                    "weapon '{}' references unknown passive '{passive}'",
                    weapon.id
                );
            }
            ensure!(
                arts.contains(&weapon.category),
                "weapon '{}' has no weapon art for category '{}'",
                weapon.id,
                weapon.category
            );
        }

        for armor in &self.items.armors {
            for affix in &armor.effect.built_in_affixes {
                ensure!(
                    affixes.contains(affix.as_str()),
                    "armor '{}' references unknown built-in affix '{affix}'",
                    armor.id
                );
            }
        }

        for rune in &self.items.runes {
            ensure!(
                affixes.contains(rune.affix.as_str()),
                "rune '{}' grants unknown affix '{}'",
                rune.id,
                rune.affix
            );
        }

        for class in &self.classes {
            ensure!(
                skills.contains(class.skill.as_str()),
                "class '{}' references unknown class skill '{}'",
                class.id,
                class.skill
            );
            if let Some(weapon) = &class.starting_weapon {
                ensure!(
                    weapons.contains(weapon.as_str()),
                    "class '{}' starts with unknown weapon '{weapon}'",
                    class.id
                );
            }
            if let Some(armor) = &class.starting_armor {
                ensure!(
                    armors.contains(armor.as_str()),
                    "class '{}' starts with unknown armor '{armor}'",
                    class.id
                );
            }
        }

        unique_ids("story script", self.story.iter().map(|s| s.id.as_str()))
            .context("story scripts")?;
        Ok(())
    }
}

fn unique_ids<'a>(
    what: &str,
    ids: impl Iterator<Item = &'a str>,
) -> LoadResult<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {what} id '{id}'");
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use battle_core::{
        ArtEffect, Attributes, ClassSkillDefinition, RuneDefinition, WeaponArtDefinition,
        WeaponDefinition,
    };

    use super::*;

    fn minimal() -> ContentBundle {
        let mut bundle = ContentBundle::default();
        bundle.skills.class_skills.push(ClassSkillDefinition {
            id: "slam".into(),
            name: "Slam".into(),
            atk_ratio: 1.5,
            ..ClassSkillDefinition::default()
        });
        bundle.skills.arts.push(WeaponArtDefinition {
            id: "quick_slash".into(),
            name: "Quick Slash".into(),
            category: WeaponCategory::Sword,
            cooldown_millis: 6_000,
            effect: ArtEffect::Strike {
                atk_ratio: 0.5,
                status: None,
                status_chance: 0.0,
            },
        });
        bundle.items.weapons.push(WeaponDefinition {
            id: "wooden_sword".into(),
            name: "Wooden Sword".into(),
            category: WeaponCategory::Sword,
            atk: 5,
            max_sockets: 4,
            passive: None,
        });
        bundle.classes.push(ClassTemplate {
            id: "fighter".into(),
            name: "Fighter".into(),
            base_hp: 100,
            attributes: Attributes::default(),
            skill: "slam".into(),
            crit_bonus: 0.0,
            starting_weapon: Some("wooden_sword".into()),
            starting_armor: None,
            starting_potions: 3,
            starting_gold: 0,
        });
        bundle
    }

    #[test]
    fn consistent_bundle_validates() {
        minimal().validate().expect("valid");
    }

    #[test]
    fn unknown_class_skill_is_named() {
        let mut bundle = minimal();
        bundle.classes[0].skill = "kick".into();
        let err = bundle.validate().expect_err("dangling skill");
        assert!(err.to_string().contains("'kick'"), "{err}");
    }

    #[test]
    fn rune_must_grant_a_known_affix() {
        let mut bundle = minimal();
        bundle.items.runes.push(RuneDefinition {
            id: "fang_rune".into(),
            name: "Fang Rune".into(),
            affix: "life_steal".into(),
        });
        let err = bundle.validate().expect_err("dangling affix");
        assert!(err.to_string().contains("life_steal"), "{err}");
    }

    #[test]
    fn weapon_without_art_is_rejected() {
        let mut bundle = minimal();
        bundle.items.weapons[0].category = WeaponCategory::Bow;
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut bundle = minimal();
        let copy = bundle.classes[0].clone();
        bundle.classes.push(copy);
        let err = bundle.validate().expect_err("duplicate");
        assert!(err.to_string().contains("duplicate class id 'fighter'"), "{err}");
    }
}
