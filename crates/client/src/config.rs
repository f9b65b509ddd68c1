//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use battle_runtime::Clock;

/// Everything the `battle` binary needs to set up one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Content directory; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    pub player_name: String,
    pub class: String,
    pub monster: String,
    pub seed: u64,
    pub clock: Clock,
    /// Log directory; the platform data directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            player_name: "Adventurer".to_string(),
            class: "knight".to_string(),
            monster: "slime".to_string(),
            seed: 42,
            clock: Clock::Virtual,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: bundled data)
    /// - `BATTLE_NAME` - Player name (default: Adventurer)
    /// - `BATTLE_CLASS` - Class id (default: knight)
    /// - `BATTLE_MONSTER` - Monster id (default: slime)
    /// - `BATTLE_SEED` - Game seed (default: 42)
    /// - `BATTLE_REALTIME` - Pace ticks against wall time (default: false)
    /// - `BATTLE_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("BATTLE_DATA_DIR").map(PathBuf::from);
        config.log_dir = lookup("BATTLE_LOG_DIR").map(PathBuf::from);

        if let Some(name) = lookup("BATTLE_NAME").filter(|name| !name.trim().is_empty()) {
            config.player_name = name;
        }
        if let Some(class) = lookup("BATTLE_CLASS") {
            config.class = class.trim().to_lowercase();
        }
        if let Some(monster) = lookup("BATTLE_MONSTER") {
            config.monster = monster.trim().to_lowercase();
        }
        if let Some(seed) = lookup("BATTLE_SEED").and_then(|raw| raw.trim().parse().ok()) {
            config.seed = seed;
        }

        // Accept a bare `BATTLE_REALTIME=` as "true"
        if let Some(raw) = lookup("BATTLE_REALTIME") {
            let realtime = match raw.trim() {
                "" => true,
                value => value.parse::<bool>().unwrap_or(value == "1"),
            };
            if realtime {
                config.clock = Clock::Realtime;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BATTLE_CLASS", " Rogue "),
            ("BATTLE_MONSTER", "troll_lord"),
            ("BATTLE_SEED", "1234"),
            ("BATTLE_REALTIME", "1"),
            ("BATTLE_DATA_DIR", "/srv/battle/data"),
        ]));

        assert_eq!(config.class, "rogue");
        assert_eq!(config.monster, "troll_lord");
        assert_eq!(config.seed, 1234);
        assert_eq!(config.clock, Clock::Realtime);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/battle/data")));
        assert_eq!(config.player_name, "Adventurer");
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BATTLE_SEED", "many"),
            ("BATTLE_REALTIME", "no"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.clock, Clock::Virtual);
    }
}
