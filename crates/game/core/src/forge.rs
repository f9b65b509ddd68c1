//! Forge: refinement and rune enchanting.
//!
//! These run between encounters and only move gold, stones and runes around.
//! An impossible request leaves the player untouched and returns a
//! [`Rejection`] the host can show as-is.

use core::fmt;

use crate::config::GameConfig;
use crate::env::RuneDefinition;
use crate::state::{EquipSlot, ItemState, PlayerState};

/// Price of the next refinement level.
///
/// ```text
/// gold   = 200 + level × 100
/// stones = level + 1
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineQuote {
    pub gold: u32,
    pub stones: u32,
}

/// Why a forge request was turned down.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    NothingEquipped(EquipSlot),
    MaxRefineLevel,
    NotEnoughGold { needed: u32, held: u32 },
    NotEnoughStones { needed: u32, held: u32 },
    NoFreeSocket,
    RuneNotHeld(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingEquipped(slot) => write!(f, "Nothing is equipped in the {slot} slot."),
            Self::MaxRefineLevel => write!(
                f,
                "This item is already at +{}.",
                GameConfig::MAX_REFINE_LEVEL
            ),
            Self::NotEnoughGold { needed, held } => {
                write!(f, "Not enough gold ({held}/{needed}).")
            }
            Self::NotEnoughStones { needed, held } => {
                write!(f, "Not enough refine stones ({held}/{needed}).")
            }
            Self::NoFreeSocket => write!(f, "No free socket to enchant."),
            Self::RuneNotHeld(rune) => write!(f, "You do not carry a {rune} rune."),
        }
    }
}

/// Quotes the next refinement of `item`.
///
/// # Errors
///
/// [`Rejection::MaxRefineLevel`] once the item is at the cap.
pub fn refine_quote(item: &ItemState) -> Result<RefineQuote, Rejection> {
    if item.refine_level >= GameConfig::MAX_REFINE_LEVEL {
        return Err(Rejection::MaxRefineLevel);
    }
    let level = u32::from(item.refine_level);
    Ok(RefineQuote {
        gold: 200 + level * 100,
        stones: level + 1,
    })
}

/// Refines the item in `slot` by one level, paying the quoted price.
///
/// Returns the new level.
///
/// # Errors
///
/// Rejects an empty slot, a capped item or missing gold or stones. The player
/// is unchanged on rejection.
pub fn refine(player: &mut PlayerState, slot: EquipSlot) -> Result<u8, Rejection> {
    let item = player
        .equipped(slot)
        .ok_or(Rejection::NothingEquipped(slot))?;
    let quote = refine_quote(item)?;

    if player.gold < quote.gold {
        return Err(Rejection::NotEnoughGold {
            needed: quote.gold,
            held: player.gold,
        });
    }
    let stones = player.inventory.refine_stones;
    if stones < quote.stones {
        return Err(Rejection::NotEnoughStones {
            needed: quote.stones,
            held: stones,
        });
    }

    player.gold -= quote.gold;
    player.inventory.refine_stones -= quote.stones;
    let item = player
        .equipped_mut(slot)
        .ok_or(Rejection::NothingEquipped(slot))?;
    item.refine_level += 1;
    Ok(item.refine_level)
}

/// Sockets `rune` into the item in `slot`, consuming one rune.
///
/// # Errors
///
/// Rejects an empty slot, an item without a free socket or a rune the player
/// does not carry.
pub fn enchant(
    player: &mut PlayerState,
    slot: EquipSlot,
    rune: &RuneDefinition,
) -> Result<(), Rejection> {
    let item = player
        .equipped(slot)
        .ok_or(Rejection::NothingEquipped(slot))?;
    if item.open_sockets == 0 {
        return Err(Rejection::NoFreeSocket);
    }
    if !player.inventory.take_rune(&rune.id) {
        return Err(Rejection::RuneNotHeld(rune.name.clone()));
    }

    let item = player
        .equipped_mut(slot)
        .ok_or(Rejection::NothingEquipped(slot))?;
    item.open_sockets -= 1;
    item.affixes.push(rune.affix.clone());
    Ok(())
}
