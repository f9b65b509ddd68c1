//! Read-only content lookups and dice.
//!
//! Resolvers never own content. They borrow it through a [`BattleEnv`], which
//! bundles item, skill and actor lookups with the random source for one call.
mod actors;
mod error;
mod items;
mod rng;
mod skills;

pub use actors::{ActorOracle, BuffChance, ClassTemplate, MonsterTemplate, OnHitTable, StatusChance};
pub use error::OracleError;
pub use items::{
    AffixDefinition, AffixKind, ArmorDefinition, ArmorEffect, AttributeKind, ItemOracle,
    RuneDefinition, WeaponCategory, WeaponDefinition,
};
pub use rng::{FixedRng, PcgRng, RngOracle, Rolls, compute_seed};
pub use skills::{
    ArtEffect, ClassSkillDefinition, PassiveMode, PassiveRider, SkillOracle, WeaponArtDefinition,
    WeaponPassiveDefinition,
};

/// Borrowed oracles for one encounter call.
///
/// Any oracle may be absent; asking for a missing one yields the matching
/// `*NotAvailable` [`OracleError`].
#[derive(Clone, Copy, Default)]
pub struct BattleEnv<'a> {
    items: Option<&'a dyn ItemOracle>,
    skills: Option<&'a dyn SkillOracle>,
    actors: Option<&'a dyn ActorOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        skills: &'a dyn SkillOracle,
        actors: &'a dyn ActorOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        BattleEnv {
            items: Some(items),
            skills: Some(skills),
            actors: Some(actors),
            rng: Some(rng),
        }
    }

    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    pub fn actors(&self) -> Result<&'a dyn ActorOracle, OracleError> {
        self.actors.ok_or(OracleError::ActorsNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let present = [
            ("items", self.items.is_some()),
            ("skills", self.skills.is_some()),
            ("actors", self.actors.is_some()),
            ("rng", self.rng.is_some()),
        ];
        f.debug_list()
            .entries(present.iter().filter(|(_, on)| *on).map(|(name, _)| name))
            .finish()
    }
}
