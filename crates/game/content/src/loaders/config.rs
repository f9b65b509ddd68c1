//! Combat configuration loader.

use std::path::Path;

use anyhow::Context;
use battle_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig =
            toml::from_str(content).context("Failed to parse config TOML")?;
        if config.tick_millis == 0 {
            anyhow::bail!("tick_millis must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("flee_chance = 0.25\nrusher_haste_stacks = 2\n")
            .expect("config");
        assert!((config.flee_chance - 0.25).abs() < 1e-9);
        assert_eq!(config.rusher_haste_stacks, 2);
        assert_eq!(config.tick_millis, GameConfig::DEFAULT_TICK_MILLIS);
        assert_eq!(
            config.class_skill_cooldown_millis,
            GameConfig::DEFAULT_CLASS_SKILL_COOLDOWN_MILLIS
        );
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(ConfigLoader::parse("tick_millis = 0").is_err());
    }
}
