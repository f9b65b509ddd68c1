//! Full client session over the bundled content on the virtual clock.

use battle_client::{ClientConfig, Session, verdict};
use battle_runtime::Clock;

#[tokio::test]
async fn default_session_runs_to_a_verdict() {
    let config = ClientConfig {
        monster: "goblin".into(),
        seed: 99,
        ..ClientConfig::default()
    };
    assert_eq!(config.clock, Clock::Virtual);

    let summary = Session::open(config)
        .await
        .expect("session")
        .run()
        .await
        .expect("run");

    assert!(summary.phase.is_terminal());
    assert!(verdict(&summary).contains("Goblin"));
}

#[tokio::test]
async fn unknown_class_is_reported() {
    let config = ClientConfig {
        class: "bard".into(),
        ..ClientConfig::default()
    };
    let err = Session::open(config)
        .await
        .expect("session")
        .run()
        .await
        .expect_err("bard is not a class");
    assert!(format!("{err:#}").contains("bard"));
}
