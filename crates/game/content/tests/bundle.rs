//! Loading the bundled data directory and broken copies of it.

use std::fs;
use std::path::Path;

use battle_content::ContentFactory;
use battle_core::{ArtEffect, BuffKind, OpponentRole, StatusKind, WeaponCategory};
use tempfile::TempDir;

const FILES: [&str; 7] = [
    "config.toml",
    "classes.ron",
    "monsters.ron",
    "items.ron",
    "affixes.ron",
    "skills.ron",
    "story.ron",
];

/// Copies the bundled data into a scratch directory.
fn scratch_copy() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let source = ContentFactory::bundled();
    for file in FILES {
        fs::copy(source.root().join(file), dir.path().join(file)).expect("copy");
    }
    dir
}

fn rewrite(dir: &Path, file: &str, from: &str, to: &str) {
    let path = dir.join(file);
    let text = fs::read_to_string(&path).expect("read");
    assert!(text.contains(from), "{file} lacks {from}");
    fs::write(&path, text.replacen(from, to, 1)).expect("write");
}

#[test]
fn bundled_content_loads_and_validates() {
    let bundle = ContentFactory::bundled().load_bundle().expect("bundle");

    assert_eq!(bundle.classes.len(), 4);
    assert_eq!(bundle.config.tick_millis, 100);
    assert_eq!(bundle.config.rusher_haste_stacks, 4);

    let rogue = bundle.class("rogue").expect("rogue");
    assert!((rogue.crit_bonus - 0.15).abs() < 1e-9);
    assert_eq!(rogue.skill, "poison_blade");

    let troll = bundle.monster("troll_lord").expect("troll lord");
    assert!(troll.is_boss);
    assert_eq!(troll.role, OpponentRole::Boss);
    let goblin = bundle.monster("goblin").expect("goblin");
    assert_eq!(goblin.role, OpponentRole::Rusher);
    let knight = bundle.monster("frost_knight").expect("frost knight");
    assert_eq!(knight.on_hit.statuses[0].kind, StatusKind::Frozen);
    assert_eq!(knight.on_hit.self_buffs[0].kind, BuffKind::CounterStance);

    assert_eq!(bundle.skills.arts.len(), 5);
    let dagger_art = bundle
        .skills
        .arts
        .iter()
        .find(|art| art.category == WeaponCategory::Dagger)
        .expect("dagger art");
    assert_eq!(
        dagger_art.effect,
        ArtEffect::Stance {
            buff: BuffKind::DoubleStrike
        }
    );

    let skull_crack = bundle
        .skills
        .passives
        .iter()
        .find(|passive| passive.id == "skull_crack")
        .expect("skull crack");
    assert_eq!(skull_crack.rider.status_millis, Some(400));
    assert!((skull_crack.rider.status_chance - 1.0).abs() < 1e-9);

    assert!(bundle.story.iter().any(|script| script.id == "intro"));
}

#[test]
fn dangling_class_skill_fails_with_its_id() {
    let dir = scratch_copy();
    rewrite(dir.path(), "classes.ron", "\"shield_bash\"", "\"shield_smash\"");
    let err = ContentFactory::new(dir.path())
        .load_bundle()
        .expect_err("dangling skill");
    let message = format!("{err:#}");
    assert!(message.contains("'shield_smash'"), "{message}");
}

#[test]
fn dangling_built_in_affix_fails() {
    let dir = scratch_copy();
    rewrite(dir.path(), "items.ron", "\"bleed_hit\"]", "\"gore_hit\"]");
    let err = ContentFactory::new(dir.path())
        .load_bundle()
        .expect_err("dangling affix");
    assert!(format!("{err:#}").contains("gore_hit"));
}

#[test]
fn parse_errors_name_the_file() {
    let dir = scratch_copy();
    fs::write(dir.path().join("monsters.ron"), "(standard: [ (id: ").expect("write");
    let err = ContentFactory::new(dir.path())
        .load_bundle()
        .expect_err("bad ron");
    assert!(format!("{err:#}").contains("monsters.ron"));
}

#[test]
fn story_file_is_optional() {
    let dir = scratch_copy();
    fs::remove_file(dir.path().join("story.ron")).expect("remove");
    let bundle = ContentFactory::new(dir.path()).load_bundle().expect("bundle");
    assert!(bundle.story.is_empty());
}

#[test]
fn missing_required_file_is_reported() {
    let dir = scratch_copy();
    fs::remove_file(dir.path().join("skills.ron")).expect("remove");
    let err = ContentFactory::new(dir.path())
        .load_bundle()
        .expect_err("missing skills");
    assert!(format!("{err:#}").contains("skills.ron"));
}
