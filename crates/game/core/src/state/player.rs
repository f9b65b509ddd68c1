use std::collections::{BTreeMap, BTreeSet};

use crate::env::{ClassTemplate, ItemOracle, OracleError};
use crate::ledger::{BuffLedger, StatusLedger};
use crate::state::Combatant;

/// Base attribute points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub vitality: u32,
    pub intellect: u32,
}

impl Attributes {
    pub const fn new(strength: u32, agility: u32, vitality: u32, intellect: u32) -> Self {
        Self {
            strength,
            agility,
            vitality,
            intellect,
        }
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self {
            strength: self.strength.saturating_add(other.strength),
            agility: self.agility.saturating_add(other.agility),
            vitality: self.vitality.saturating_add(other.vitality),
            intellect: self.intellect.saturating_add(other.intellect),
        }
    }
}

/// Which equipment slot an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// A concrete piece of equipment: definition id plus per-instance upgrades.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: String,
    pub refine_level: u8,
    /// Sockets still free for enchanting.
    pub open_sockets: u8,
    pub affixes: Vec<String>,
}

impl ItemState {
    pub fn new(id: impl Into<String>, open_sockets: u8) -> Self {
        Self {
            id: id.into(),
            refine_level: 0,
            open_sockets,
            affixes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_affix(mut self, affix: impl Into<String>) -> Self {
        self.affixes.push(affix.into());
        self
    }

    #[must_use]
    pub fn with_refine_level(mut self, level: u8) -> Self {
        self.refine_level = level;
        self
    }
}

/// Materials and spare equipment carried between encounters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Inventory {
    pub items: Vec<ItemState>,
    pub refine_stones: u32,
    /// Rune id → count.
    pub runes: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn rune_count(&self, rune: &str) -> u32 {
        self.runes.get(rune).copied().unwrap_or(0)
    }

    pub fn add_runes(&mut self, rune: impl Into<String>, count: u32) {
        let entry = self.runes.entry(rune.into()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Removes one rune, returning false when none are held.
    pub fn take_rune(&mut self, rune: &str) -> bool {
        match self.runes.get_mut(rune) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.runes.remove(rune);
                }
                true
            }
            _ => false,
        }
    }
}

/// Player character. Created at class selection and kept across encounters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    pub class_id: String,
    pub attributes: Attributes,
    /// Max health before vitality correction.
    pub base_max_hp: u32,
    pub hp: u32,
    pub shield: u32,
    pub weapon: Option<ItemState>,
    pub armor: Option<ItemState>,
    pub statuses: StatusLedger,
    pub buffs: BuffLedger,
    pub potions: u32,
    /// Largest single action damage observed.
    pub max_damage: u32,
    pub gold: u32,
    pub inventory: Inventory,
    pub flags: BTreeSet<String>,
}

impl PlayerState {
    /// Creates a fresh character from a class template.
    ///
    /// # Errors
    ///
    /// Returns an [`OracleError`] if the template names starting equipment
    /// that the item oracle does not know.
    pub fn from_class(
        name: impl Into<String>,
        template: &ClassTemplate,
        items: &dyn ItemOracle,
    ) -> Result<Self, OracleError> {
        let weapon = template
            .starting_weapon
            .as_deref()
            .map(|id| {
                items
                    .weapon(id)
                    .map(|def| ItemState::new(def.id.clone(), def.max_sockets))
                    .ok_or_else(|| OracleError::WeaponNotFound(id.to_owned()))
            })
            .transpose()?;
        let armor = template
            .starting_armor
            .as_deref()
            .map(|id| {
                items
                    .armor(id)
                    .map(|def| ItemState::new(def.id.clone(), def.max_sockets))
                    .ok_or_else(|| OracleError::ArmorNotFound(id.to_owned()))
            })
            .transpose()?;

        Ok(Self {
            name: name.into(),
            class_id: template.id.clone(),
            attributes: template.attributes,
            base_max_hp: template.base_hp,
            hp: template.base_hp,
            shield: 0,
            weapon,
            armor,
            statuses: StatusLedger::empty(),
            buffs: BuffLedger::empty(),
            potions: template.starting_potions,
            max_damage: 0,
            gold: template.starting_gold,
            inventory: Inventory::default(),
            flags: BTreeSet::new(),
        })
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&ItemState> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }

    pub fn equipped_mut(&mut self, slot: EquipSlot) -> Option<&mut ItemState> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_mut(),
            EquipSlot::Armor => self.armor.as_mut(),
        }
    }

    /// Equipped items in weapon, armor order.
    pub fn equipment(&self) -> impl Iterator<Item = &ItemState> {
        self.weapon.iter().chain(self.armor.iter())
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

impl Combatant for PlayerState {
    fn label(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn shield(&self) -> u32 {
        self.shield
    }

    fn statuses(&self) -> &StatusLedger {
        &self.statuses
    }

    fn buffs(&self) -> &BuffLedger {
        &self.buffs
    }
}
