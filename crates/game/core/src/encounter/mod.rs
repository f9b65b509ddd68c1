//! Encounter controller.
//!
//! [`Encounter`] is the only owner of the two combatants during a fight. It
//! feeds the [`TickDriver`], fires resolvers when a gauge fills, applies every
//! [`ActionOutcome`] in one pass and moves through the phase machine:
//!
//! ```text
//! Idle ──start──▶ Active ──┬──▶ OpponentDefeated
//!                          ├──▶ PlayerDefeated
//!                          └──▶ Fled
//! ```
//!
//! Oracles are passed per call as a [`BattleEnv`], so the controller holds no
//! borrowed content and can move freely between threads.

mod error;
mod narrative;

pub use error::EncounterError;
pub use narrative::{
    DialogueLine, NarrativeContext, NarrativeOracle, NarrativePhase, ScriptPayload,
};

use crate::combat::damage::floor_u32;
use crate::combat::{ActionOutcome, OutcomeBuilder, Side};
use crate::config::GameConfig;
use crate::env::{BattleEnv, MonsterTemplate, OracleError, Rolls};
use crate::ledger::BuffKind;
use crate::passive::{PassiveEffect, PassiveRegistry};
use crate::resolve::{
    Combat, basic_attack, class_skill, opponent_attack, use_potion, weapon_art,
};
use crate::state::{OpponentRole, OpponentState, PlayerState};
use crate::stats::{DerivedStats, Loadout, derive_stats};
use crate::tick::{CooldownTimers, TickDriver};

/// Lifecycle of one encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncounterPhase {
    #[default]
    Idle,
    Active,
    OpponentDefeated,
    PlayerDefeated,
    Fled,
}

impl EncounterPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::OpponentDefeated | Self::PlayerDefeated | Self::Fled
        )
    }
}

/// Actions the player chooses; basic attacks happen on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlayerCommand {
    ClassSkill,
    WeaponArt,
    UsePotion,
    Flee,
}

/// Serializable view of a running encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSnapshot {
    pub phase: EncounterPhase,
    pub player: PlayerState,
    pub opponent: OpponentState,
    pub player_gauge: f64,
    pub opponent_gauge: f64,
    pub cooldowns: CooldownTimers,
    pub nonce: u64,
    pub elapsed_millis: u64,
}

/// Which resolver to run.
#[derive(Clone, Copy, Debug)]
enum Act {
    Attack,
    Retaliate,
    ClassSkill,
    WeaponArt,
    Potion,
}

impl Act {
    const fn side(self) -> Side {
        match self {
            Self::Retaliate => Side::Opponent,
            _ => Side::Player,
        }
    }
}

/// One fight between the player and a single opponent.
#[derive(Clone, Debug)]
pub struct Encounter {
    player: PlayerState,
    opponent: OpponentState,
    config: GameConfig,
    passives: PassiveRegistry,
    seed: u64,
    nonce: u64,
    phase: EncounterPhase,
    player_gauge: f64,
    opponent_gauge: f64,
    cooldowns: CooldownTimers,
    elapsed_millis: u64,
}

impl Encounter {
    pub fn new(player: PlayerState, opponent: OpponentState, config: GameConfig, seed: u64) -> Self {
        Self {
            player,
            opponent,
            config,
            passives: PassiveRegistry::standard(),
            seed,
            nonce: 0,
            phase: EncounterPhase::Idle,
            player_gauge: 0.0,
            opponent_gauge: 0.0,
            cooldowns: CooldownTimers::default(),
            elapsed_millis: 0,
        }
    }

    /// Spawns a fresh opponent from `template`.
    pub fn spawn(
        player: PlayerState,
        template: &MonsterTemplate,
        config: GameConfig,
        seed: u64,
    ) -> Self {
        Self::new(player, OpponentState::spawn(template), config, seed)
    }

    /// Resumes an encounter from a snapshot.
    pub fn restore(snapshot: EncounterSnapshot, config: GameConfig, seed: u64) -> Self {
        Self {
            player: snapshot.player,
            opponent: snapshot.opponent,
            config,
            passives: PassiveRegistry::standard(),
            seed,
            nonce: snapshot.nonce,
            phase: snapshot.phase,
            player_gauge: snapshot.player_gauge,
            opponent_gauge: snapshot.opponent_gauge,
            cooldowns: snapshot.cooldowns,
            elapsed_millis: snapshot.elapsed_millis,
        }
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn opponent(&self) -> &OpponentState {
        &self.opponent
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_gauge(&self) -> f64 {
        self.player_gauge
    }

    pub fn opponent_gauge(&self) -> f64 {
        self.opponent_gauge
    }

    pub fn cooldowns(&self) -> CooldownTimers {
        self.cooldowns
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    pub fn snapshot(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            phase: self.phase,
            player: self.player.clone(),
            opponent: self.opponent.clone(),
            player_gauge: self.player_gauge,
            opponent_gauge: self.opponent_gauge,
            cooldowns: self.cooldowns,
            nonce: self.nonce,
            elapsed_millis: self.elapsed_millis,
        }
    }

    /// Derived player stats under the current equipment and buffs.
    ///
    /// # Errors
    ///
    /// Fails when the player's equipment references unknown content.
    pub fn player_stats(&self, env: &BattleEnv<'_>) -> Result<DerivedStats, EncounterError> {
        let loadout = Loadout::resolve(&self.player, env.items()?, env.skills()?)?;
        Ok(derive_stats(&self.player, &loadout))
    }

    /// Moves from `Idle` to `Active`.
    ///
    /// A rusher opens hasted, the player gauge starts at the opening value plus
    /// `first_strike`, and the shield is refilled to max shield plus
    /// `start_shield`.
    ///
    /// # Errors
    ///
    /// [`EncounterError::AlreadyActive`] unless idle; oracle errors for bad loadouts.
    pub fn start(&mut self, env: &BattleEnv<'_>) -> Result<ActionOutcome, EncounterError> {
        if self.phase != EncounterPhase::Idle {
            return Err(EncounterError::AlreadyActive(self.phase));
        }

        let loadout = Loadout::resolve(&self.player, env.items()?, env.skills()?)?;
        let stats = derive_stats(&self.player, &loadout);
        let first_strike = loadout.stacked(PassiveEffect::FirstStrike);
        let start_shield = loadout.stacked(PassiveEffect::StartShield);

        let mut player = self.player.clone();
        let mut opponent = self.opponent.clone();
        let mut out = OutcomeBuilder::new();
        out.log(format!("{} appears!", opponent.name));

        if opponent.role == OpponentRole::Rusher {
            for _ in 0..self.config.rusher_haste_stacks {
                opponent
                    .buffs
                    .apply(BuffKind::Haste, self.config.rusher_haste_millis, false);
            }
            out.log(format!("{} rushes in!", opponent.name));
        }

        let bonus_shield = if start_shield.is_active() {
            floor_u32(f64::from(stats.max_hp) * start_shield.value)
        } else {
            0
        };
        player.shield = stats.max_shield.saturating_add(bonus_shield);

        self.player_gauge = self.config.opening_gauge;
        if first_strike.is_active() {
            self.player_gauge += first_strike.value;
        }
        self.player_gauge = clamp_gauge(self.player_gauge);
        self.opponent_gauge = 0.0;
        self.cooldowns = CooldownTimers::default();

        let outcome = out.finish(&self.player, &player, &self.opponent, &opponent);
        self.player = player;
        self.opponent = opponent;
        self.phase = EncounterPhase::Active;
        Ok(outcome)
    }

    /// Advances one tick and fires any resolver whose gauge filled.
    ///
    /// Returns the tick's own outcome (when it changed anything) followed by
    /// the player's action and then the opponent's, in application order.
    /// The player acts first on a simultaneous fill, and the opponent does not
    /// act at all if the player's action ended the encounter.
    ///
    /// # Errors
    ///
    /// [`EncounterError::NotActive`] outside the active phase.
    pub fn tick(&mut self, env: &BattleEnv<'_>) -> Result<Vec<ActionOutcome>, EncounterError> {
        self.ensure_active()?;
        let stats = self.player_stats(env)?;

        let report = TickDriver::new(&self.config).tick(
            &self.player,
            &self.opponent,
            &stats,
            self.cooldowns,
        );
        self.elapsed_millis += u64::from(self.config.tick_millis);
        self.cooldowns = report.cooldowns;
        self.player_gauge = clamp_gauge(self.player_gauge + report.player_gauge_delta);
        self.opponent_gauge = clamp_gauge(self.opponent_gauge + report.opponent_gauge_delta);

        let mut outcomes = Vec::new();
        self.apply(&report.outcome);
        if !report.outcome.is_noop() {
            outcomes.push(report.outcome);
        }

        if self.phase == EncounterPhase::Active && self.player_gauge >= GameConfig::GAUGE_FULL {
            self.player_gauge = 0.0;
            outcomes.push(self.resolve_and_apply(env, Act::Attack)?);
        }
        if self.phase == EncounterPhase::Active && self.opponent_gauge >= GameConfig::GAUGE_FULL {
            self.opponent_gauge = 0.0;
            outcomes.push(self.resolve_and_apply(env, Act::Retaliate)?);
        }
        Ok(outcomes)
    }

    /// Runs a player command immediately.
    ///
    /// Commands never touch the gauges except through their outcome. A class
    /// skill or weapon art still on cooldown is rejected with a no-op.
    ///
    /// # Errors
    ///
    /// [`EncounterError::NotActive`] outside the active phase; oracle errors
    /// for bad content references.
    pub fn command(
        &mut self,
        env: &BattleEnv<'_>,
        command: PlayerCommand,
    ) -> Result<ActionOutcome, EncounterError> {
        self.ensure_active()?;
        match command {
            PlayerCommand::ClassSkill if !self.cooldowns.class_skill_ready() => Ok(
                ActionOutcome::noop(recharging("Class skill", self.cooldowns.class_skill_millis)),
            ),
            PlayerCommand::WeaponArt if !self.cooldowns.weapon_art_ready() => Ok(
                ActionOutcome::noop(recharging("Weapon art", self.cooldowns.weapon_art_millis)),
            ),
            PlayerCommand::ClassSkill => self.resolve_and_apply(env, Act::ClassSkill),
            PlayerCommand::WeaponArt => self.resolve_and_apply(env, Act::WeaponArt),
            PlayerCommand::UsePotion => self.resolve_and_apply(env, Act::Potion),
            PlayerCommand::Flee => self.flee(env),
        }
    }

    /// Asks `oracle` whether a script fires at `phase`. Payloads are returned
    /// untouched.
    pub fn narrative_hook(
        &self,
        oracle: &dyn NarrativeOracle,
        ctx: &NarrativeContext,
        phase: NarrativePhase,
    ) -> Option<ScriptPayload> {
        oracle.should_trigger(&self.player, ctx, phase)
    }

    fn ensure_active(&self) -> Result<(), EncounterError> {
        if self.phase == EncounterPhase::Active {
            Ok(())
        } else {
            Err(EncounterError::NotActive(self.phase))
        }
    }

    fn flee(&mut self, env: &BattleEnv<'_>) -> Result<ActionOutcome, EncounterError> {
        let mut rolls = Rolls::new(env.rng()?, self.seed, self.nonce, Side::Player);
        self.nonce += 1;

        if rolls.chance(self.config.flee_chance) {
            self.phase = EncounterPhase::Fled;
            Ok(ActionOutcome::noop(format!("{} escapes!", self.player.name)))
        } else {
            self.player_gauge = 0.0;
            Ok(ActionOutcome::noop("Failed to escape!"))
        }
    }

    fn resolve_and_apply(
        &mut self,
        env: &BattleEnv<'_>,
        act: Act,
    ) -> Result<ActionOutcome, EncounterError> {
        let outcome = self.resolve(env, act)?;
        self.nonce += 1;
        self.apply(&outcome);
        Ok(outcome)
    }

    fn resolve(&self, env: &BattleEnv<'_>, act: Act) -> Result<ActionOutcome, EncounterError> {
        let items = env.items()?;
        let skills = env.skills()?;
        let class = env
            .actors()?
            .class(&self.player.class_id)
            .ok_or_else(|| OracleError::ClassNotFound(self.player.class_id.clone()))?;

        let loadout = Loadout::resolve(&self.player, items, skills)?;
        let stats = derive_stats(&self.player, &loadout);
        let combat = Combat::new(
            &self.player,
            &self.opponent,
            &stats,
            &loadout,
            &self.passives,
            &self.config,
        )
        .with_crit_bonus(class.crit_bonus);
        let rolls = Rolls::new(env.rng()?, self.seed, self.nonce, act.side());

        let outcome = match act {
            Act::Attack => basic_attack(combat, rolls),
            Act::Retaliate => opponent_attack(combat, rolls),
            Act::ClassSkill => {
                let skill = skills
                    .class_skill(&class.skill)
                    .ok_or_else(|| OracleError::ClassSkillNotFound(class.skill.clone()))?;
                class_skill(combat, skill, rolls)
            }
            Act::WeaponArt => {
                let art = loadout
                    .weapon_category()
                    .and_then(|category| skills.weapon_art(category));
                weapon_art(combat, art, rolls)
            }
            Act::Potion => use_potion(combat),
        };
        Ok(outcome)
    }

    /// Applies one outcome and settles the phase.
    fn apply(&mut self, outcome: &ActionOutcome) {
        outcome.player.apply_to(&mut self.player);
        outcome.opponent.apply_to(&mut self.opponent);

        if let Some(millis) = outcome.cooldowns.class_skill {
            self.cooldowns.class_skill_millis = millis;
        }
        if let Some(millis) = outcome.cooldowns.weapon_art {
            self.cooldowns.weapon_art_millis = millis;
        }
        self.player_gauge = clamp_gauge(self.player_gauge + outcome.player_gauge_delta);
        self.opponent_gauge = clamp_gauge(self.opponent_gauge + outcome.opponent_gauge_delta);

        if self.opponent.hp == 0 {
            self.phase = EncounterPhase::OpponentDefeated;
        } else if self.player.hp == 0 {
            self.phase = EncounterPhase::PlayerDefeated;
        }
    }
}

/// Gauges live in `[0, 100]`; overflow is discarded.
fn clamp_gauge(gauge: f64) -> f64 {
    gauge.clamp(0.0, GameConfig::GAUGE_FULL)
}

fn recharging(what: &str, remaining_millis: u32) -> String {
    format!(
        "{what} is recharging ({:.1}s).",
        f64::from(remaining_millis) / 1_000.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClassSkillDefinition, ClassTemplate, FixedRng};
    use crate::resolve::fixtures::{Catalog, bare_player};
    use crate::state::Attributes;

    fn world() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.classes.insert(
            "warrior".into(),
            ClassTemplate {
                id: "warrior".into(),
                name: "Warrior".into(),
                base_hp: 100,
                attributes: Attributes::default(),
                skill: "cleave".into(),
                crit_bonus: 0.0,
                starting_weapon: None,
                starting_armor: None,
                starting_potions: 3,
                starting_gold: 0,
            },
        );
        catalog.skills.insert(
            "cleave".into(),
            ClassSkillDefinition {
                id: "cleave".into(),
                name: "Cleave".into(),
                atk_ratio: 2.0,
                ..ClassSkillDefinition::default()
            },
        );
        catalog
    }

    fn env<'a>(catalog: &'a Catalog, rng: &'a FixedRng) -> BattleEnv<'a> {
        BattleEnv::new(catalog, catalog, catalog, rng)
    }

    fn run_to_end(encounter: &mut Encounter, env: &BattleEnv<'_>) -> Vec<ActionOutcome> {
        let mut all = Vec::new();
        for _ in 0..10_000 {
            if encounter.is_over() {
                break;
            }
            all.extend(encounter.tick(env).expect("tick"));
        }
        all
    }

    #[test]
    fn start_primes_gauges_and_rejects_restart() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let wolf = OpponentState::with_stats("wolf", 30, 5, 0, 10);
        let mut encounter = Encounter::new(bare_player(100), wolf, GameConfig::default(), 1);

        assert_eq!(
            encounter.tick(&env),
            Err(EncounterError::NotActive(EncounterPhase::Idle))
        );
        encounter.start(&env).expect("start");
        assert_eq!(encounter.phase(), EncounterPhase::Active);
        assert!((encounter.player_gauge() - 30.0).abs() < 1e-9);
        assert!(encounter.opponent_gauge().abs() < 1e-9);
        assert_eq!(
            encounter.start(&env),
            Err(EncounterError::AlreadyActive(EncounterPhase::Active))
        );
    }

    #[test]
    fn fight_runs_to_opponent_defeat() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        // Player atk 10 needs three hits; the wolf lands one bite of 4 first.
        let wolf = OpponentState::with_stats("wolf", 30, 5, 0, 10);
        let mut encounter = Encounter::new(bare_player(100), wolf, GameConfig::default(), 1);
        encounter.start(&env).expect("start");

        let outcomes = run_to_end(&mut encounter, &env);
        assert_eq!(encounter.phase(), EncounterPhase::OpponentDefeated);
        assert_eq!(encounter.opponent().hp, 0);
        assert_eq!(encounter.player().hp, 96);
        assert!(outcomes.last().is_some_and(|outcome| outcome.opponent_died));
        assert_eq!(encounter.elapsed_millis(), 13_500);
        assert!(matches!(
            encounter.tick(&env),
            Err(EncounterError::NotActive(EncounterPhase::OpponentDefeated))
        ));
    }

    #[test]
    fn player_acts_first_on_simultaneous_fill() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let config = GameConfig {
            opening_gauge: 0.0,
            ..GameConfig::default()
        };
        // Same speed: both gauges fill on tick 50 and the player's hit kills.
        let glass = OpponentState::with_stats("glass golem", 10, 50, 0, 20);
        let mut encounter = Encounter::new(bare_player(100), glass, config, 1);
        encounter.start(&env).expect("start");

        let outcomes = run_to_end(&mut encounter, &env);
        assert_eq!(encounter.phase(), EncounterPhase::OpponentDefeated);
        assert_eq!(encounter.player().hp, 100);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(encounter.elapsed_millis(), 5_000);
    }

    #[test]
    fn flee_success_and_failure() {
        let catalog = world();
        let wolf = OpponentState::with_stats("wolf", 30, 5, 0, 10);

        let lucky = FixedRng::always_succeed();
        let lucky_env = env(&catalog, &lucky);
        let mut escaped =
            Encounter::new(bare_player(100), wolf.clone(), GameConfig::default(), 1);
        escaped.start(&lucky_env).expect("start");
        escaped
            .command(&lucky_env, PlayerCommand::Flee)
            .expect("flee");
        assert_eq!(escaped.phase(), EncounterPhase::Fled);

        let unlucky = FixedRng::always_fail();
        let unlucky_env = env(&catalog, &unlucky);
        let mut caught = Encounter::new(bare_player(100), wolf, GameConfig::default(), 1);
        caught.start(&unlucky_env).expect("start");
        let outcome = caught
            .command(&unlucky_env, PlayerCommand::Flee)
            .expect("flee");
        assert_eq!(outcome.logs, vec!["Failed to escape!".to_string()]);
        assert_eq!(caught.phase(), EncounterPhase::Active);
        assert!(caught.player_gauge().abs() < 1e-9);
    }

    #[test]
    fn class_skill_respects_cooldown() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let troll = OpponentState::with_stats("troll", 100, 5, 0, 10);
        let mut encounter = Encounter::new(bare_player(100), troll, GameConfig::default(), 1);
        encounter.start(&env).expect("start");

        let first = encounter
            .command(&env, PlayerCommand::ClassSkill)
            .expect("cast");
        assert_eq!(first.opponent.hp, Some(80));
        assert_eq!(encounter.cooldowns().class_skill_millis, 5_000);

        let second = encounter
            .command(&env, PlayerCommand::ClassSkill)
            .expect("cast");
        assert!(second.is_noop());
        assert_eq!(encounter.opponent().hp, 80);
    }

    #[test]
    fn unknown_class_is_a_loadout_error() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let mut stranger = bare_player(100);
        stranger.class_id = "bard".into();
        let troll = OpponentState::with_stats("troll", 100, 5, 0, 10);
        let mut encounter = Encounter::new(stranger, troll, GameConfig::default(), 1);
        encounter.start(&env).expect("start");

        assert_eq!(
            encounter.command(&env, PlayerCommand::UsePotion),
            Err(EncounterError::Oracle(OracleError::ClassNotFound("bard".into())))
        );
    }

    #[test]
    fn rusher_opens_hasted() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let imp = OpponentState::with_stats("imp", 30, 5, 0, 10).with_role(OpponentRole::Rusher);
        let mut encounter = Encounter::new(bare_player(100), imp, GameConfig::default(), 1);
        encounter.start(&env).expect("start");

        let haste = encounter
            .opponent()
            .buffs
            .get(BuffKind::Haste)
            .copied()
            .expect("hasted");
        assert_eq!(haste.stacks, 4);
        assert_eq!(haste.remaining_millis, 4_000);
    }

    #[test]
    fn snapshot_round_trips_through_restore() {
        let catalog = world();
        let rng = FixedRng::always_fail();
        let env = env(&catalog, &rng);
        let wolf = OpponentState::with_stats("wolf", 30, 5, 0, 10);
        let mut encounter = Encounter::new(bare_player(100), wolf, GameConfig::default(), 9);
        encounter.start(&env).expect("start");
        for _ in 0..40 {
            encounter.tick(&env).expect("tick");
        }

        let snapshot = encounter.snapshot();
        assert_eq!(snapshot.opponent.hp, 20);
        let resumed = Encounter::restore(snapshot.clone(), GameConfig::default(), 9);
        assert_eq!(resumed.snapshot(), snapshot);
    }

    struct Greeter;

    impl NarrativeOracle for Greeter {
        fn should_trigger(
            &self,
            player: &PlayerState,
            ctx: &NarrativeContext,
            phase: NarrativePhase,
        ) -> Option<ScriptPayload> {
            (phase == NarrativePhase::BeforeBattle && ctx.depth == 1).then(|| ScriptPayload {
                id: format!("welcome_{}", player.class_id),
                ..ScriptPayload::default()
            })
        }
    }

    #[test]
    fn narrative_hook_defers_to_oracle() {
        let wolf = OpponentState::with_stats("wolf", 30, 5, 0, 10);
        let encounter = Encounter::new(bare_player(100), wolf, GameConfig::default(), 1);
        let ctx = NarrativeContext::new("battle", 1, 1);

        let payload = encounter.narrative_hook(&Greeter, &ctx, NarrativePhase::BeforeBattle);
        assert_eq!(payload.map(|p| p.id), Some("welcome_warrior".to_string()));
        assert!(
            encounter
                .narrative_hook(&Greeter, &ctx, NarrativePhase::Camp)
                .is_none()
        );
    }
}
