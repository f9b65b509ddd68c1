//! Oracle access errors.
//!
//! Errors related to oracle availability and content lookups.

use crate::env::WeaponCategory;
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// An unknown id means content references something that was never loaded.
/// Loaders validate every reference up front, so seeing one of these during
/// combat indicates state built outside the content pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("ActorOracle not available")]
    ActorsNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("weapon '{0}' not found")]
    WeaponNotFound(String),

    #[error("armor '{0}' not found")]
    ArmorNotFound(String),

    #[error("affix '{0}' not found")]
    AffixNotFound(String),

    #[error("rune '{0}' not found")]
    RuneNotFound(String),

    #[error("weapon passive '{0}' not found")]
    PassiveNotFound(String),

    #[error("no weapon art for category '{0}'")]
    WeaponArtNotFound(WeaponCategory),

    #[error("class skill '{0}' not found")]
    ClassSkillNotFound(String),

    #[error("class '{0}' not found")]
    ClassNotFound(String),

    #[error("monster '{0}' not found")]
    MonsterNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            ItemsNotAvailable | SkillsNotAvailable | ActorsNotAvailable | RngNotAvailable => {
                ErrorSeverity::Fatal
            }

            WeaponNotFound(_)
            | ArmorNotFound(_)
            | AffixNotFound(_)
            | RuneNotFound(_)
            | PassiveNotFound(_)
            | WeaponArtNotFound(_)
            | ClassSkillNotFound(_)
            | ClassNotFound(_)
            | MonsterNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            ActorsNotAvailable => "ORACLE_ACTORS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
            ArmorNotFound(_) => "ORACLE_ARMOR_NOT_FOUND",
            AffixNotFound(_) => "ORACLE_AFFIX_NOT_FOUND",
            RuneNotFound(_) => "ORACLE_RUNE_NOT_FOUND",
            PassiveNotFound(_) => "ORACLE_PASSIVE_NOT_FOUND",
            WeaponArtNotFound(_) => "ORACLE_WEAPON_ART_NOT_FOUND",
            ClassSkillNotFound(_) => "ORACLE_CLASS_SKILL_NOT_FOUND",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
        }
    }
}
