//! One auto-piloted encounter from content load to final result.
use std::io::Write as _;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use battle_content::{ContentBundle, ContentFactory};
use battle_core::{EncounterPhase, NarrativeContext, NarrativePhase, ScriptPayload};
use battle_runtime::{
    AutoPilot, EncounterSummary, Event, OracleManager, Runtime, RuntimeConfig, RuntimeHandle,
    Topic,
};

use crate::config::ClientConfig;

pub struct Session {
    config: ClientConfig,
    oracles: OracleManager,
    runtime: Runtime,
}

impl Session {
    /// Loads content and builds the runtime.
    pub async fn open(config: ClientConfig) -> Result<Self> {
        let factory = config
            .data_dir
            .clone()
            .map_or_else(ContentFactory::bundled, ContentFactory::new);
        let bundle = factory.load_bundle()?;
        let oracles = OracleManager::from_bundle(&bundle);

        let runtime = Runtime::builder()
            .config(runtime_config(&bundle, &config))
            .oracles(oracles.clone())
            .provider(AutoPilot::default())
            .build()
            .await?;

        Ok(Self {
            config,
            oracles,
            runtime,
        })
    }

    /// Runs the configured fight, streaming combat lines to stdout.
    pub async fn run(self) -> Result<EncounterSummary> {
        let Self {
            config,
            oracles,
            runtime,
        } = self;
        let handle = runtime.handle();

        let player = oracles
            .new_player(config.player_name.as_str(), &config.class)
            .with_context(|| format!("Cannot create a '{}' character", config.class))?;
        let location = match oracles.monster(&config.monster) {
            Ok(template) if template.is_boss => "boss",
            _ => "battle",
        };

        let printer = spawn_printer(&handle);
        let summary = runtime
            .run_encounter(player, config.monster.as_str(), config.seed)
            .await?;

        if summary.victory() {
            let ctx = NarrativeContext::new(location, 1, 1);
            if let Some(script) = handle.narrative(NarrativePhase::AfterBattle, ctx).await? {
                print_script(&script);
            }
        }

        drop(handle);
        runtime.shutdown().await?;
        printer.await.context("Combat printer task failed")?;

        Ok(summary)
    }
}

fn runtime_config(bundle: &ContentBundle, config: &ClientConfig) -> RuntimeConfig {
    RuntimeConfig {
        game: bundle.config.clone(),
        clock: config.clock,
        ..RuntimeConfig::default()
    }
}

/// Prints outcome logs as they are published. Ends when the runtime shuts down.
fn spawn_printer(handle: &RuntimeHandle) -> JoinHandle<()> {
    let mut combat = handle.subscribe(Topic::Combat);
    tokio::spawn(async move {
        loop {
            match combat.recv().await {
                Ok(Event::Outcome { outcome, .. }) => {
                    let mut stdout = std::io::stdout().lock();
                    for line in &outcome.logs {
                        if writeln!(stdout, "{line}").is_err() {
                            return;
                        }
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "combat printer fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn print_script(script: &ScriptPayload) {
    for line in &script.lines {
        println!("{}: {}", line.speaker, line.text);
    }
}

/// Final one-line verdict for the summary.
pub fn verdict(summary: &EncounterSummary) -> String {
    let seconds = summary.elapsed_millis as f64 / 1000.0;
    let opponent = &summary.view.snapshot.opponent.name;
    match summary.phase {
        EncounterPhase::OpponentDefeated => format!("Victory over {opponent} in {seconds:.1}s."),
        EncounterPhase::PlayerDefeated => format!("Defeated by {opponent} after {seconds:.1}s."),
        EncounterPhase::Fled => format!("Escaped from {opponent} after {seconds:.1}s."),
        phase => format!("Encounter stopped in phase {phase}."),
    }
}
