//! Whole exchanges driven through the public API.

mod common;

use battle_core::resolve::basic_attack;
use battle_core::{
    ActionOutcome, ArmorEffect, Combat, DerivedStats, Encounter, EncounterPhase, FixedRng,
    GameConfig, Loadout, OpponentState, PassiveRegistry, PcgRng, PlayerCommand, Rolls, Side,
};

use common::{Catalog, fighter, wearing};

#[test]
fn basic_exchange_kills_in_two_swings() {
    let catalog = Catalog::basic();
    let registry = PassiveRegistry::standard();
    let config = GameConfig::default();
    let rng = FixedRng::always_fail();
    let player = fighter(100);
    let loadout = Loadout::resolve(&player, &catalog, &catalog).expect("loadout");
    let stats = DerivedStats {
        atk: 20,
        speed: 20,
        max_hp: 100,
        crit_damage: 1.5,
        dodge_chance: 0.05,
        ..DerivedStats::default()
    };
    let mut slime = OpponentState::with_stats("slime", 30, 5, 0, 10);

    let first = basic_attack(
        Combat::new(&player, &slime, &stats, &loadout, &registry, &config),
        Rolls::new(&rng, 3, 0, Side::Player),
    );
    assert_eq!(first.opponent.hp, Some(10));
    assert!(!first.opponent_died);
    first.opponent.apply_to(&mut slime);

    let second = basic_attack(
        Combat::new(&player, &slime, &stats, &loadout, &registry, &config),
        Rolls::new(&rng, 3, 1, Side::Player),
    );
    assert_eq!(second.opponent.hp, Some(0));
    assert!(second.opponent_died);
}

#[test]
fn potion_heals_through_the_controller() {
    let catalog = Catalog::basic();
    let rng = FixedRng::always_fail();
    let env = catalog.env(&rng);
    let mut player = fighter(200);
    player.hp = 50;
    let bat = OpponentState::with_stats("bat", 20, 3, 0, 10);
    let mut encounter = Encounter::new(player, bat, GameConfig::default(), 5);
    encounter.start(&env).expect("start");

    let outcome = encounter
        .command(&env, PlayerCommand::UsePotion)
        .expect("potion");
    assert_eq!(outcome.player.hp, Some(120));
    assert_eq!(encounter.player().hp, 120);
    assert_eq!(encounter.player().potions, 1);
}

#[test]
fn death_save_holds_each_time_health_is_above_half() {
    let catalog = Catalog::basic().with_armor(
        "undying",
        0,
        ArmorEffect {
            death_save: true,
            ..ArmorEffect::default()
        },
    );
    let rng = FixedRng::always_fail();
    let env = catalog.env(&rng);
    let player = wearing(fighter(100), "undying", &[]);
    let ogre = OpponentState::with_stats("ogre", 1_000, 500, 0, 10);
    let mut encounter = Encounter::new(player, ogre, GameConfig::default(), 5);
    encounter.start(&env).expect("start");

    // The ogre first acts on tick 100: the save leaves the player at 1.
    for _ in 0..100 {
        encounter.tick(&env).expect("tick");
    }
    assert_eq!(encounter.phase(), EncounterPhase::Active);
    assert_eq!(encounter.player().hp, 1);

    // At 1% health the next blow is fatal.
    let mut outcomes: Vec<ActionOutcome> = Vec::new();
    while !encounter.is_over() {
        outcomes.extend(encounter.tick(&env).expect("tick"));
    }
    assert_eq!(encounter.phase(), EncounterPhase::PlayerDefeated);
    assert!(outcomes.iter().any(|outcome| outcome.player_died));
    assert_eq!(encounter.elapsed_millis(), 20_000);
}

#[test]
fn same_seed_replays_identically() {
    let catalog = Catalog::basic();
    let rng = PcgRng;
    let env = catalog.env(&rng);

    let run = |seed: u64| {
        let wolf = OpponentState::with_stats("wolf", 60, 8, 2, 14);
        let mut encounter = Encounter::new(fighter(100), wolf, GameConfig::default(), seed);
        encounter.start(&env).expect("start");
        let mut log = Vec::new();
        for _ in 0..5_000 {
            if encounter.is_over() {
                break;
            }
            log.extend(encounter.tick(&env).expect("tick"));
        }
        (log, encounter.snapshot())
    };

    let (first_log, first_end) = run(42);
    let (second_log, second_end) = run(42);
    assert!(first_end.phase.is_terminal());
    assert_eq!(first_log, second_log);
    assert_eq!(first_end, second_end);
}
