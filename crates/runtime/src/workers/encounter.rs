//! Encounter worker that owns the authoritative [`battle_core::Encounter`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies them through the
//! encounter controller, and publishes events to the [`EventBus`].

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use battle_core::{
    ActionOutcome, Encounter, EncounterError, EncounterPhase, EncounterSnapshot, GameError,
    NarrativeContext, NarrativePhase, PlayerCommand, PlayerState, ScriptPayload,
};

use crate::api::{EncounterView, Progress, Result, RuntimeError};
use crate::events::{Event, EventBus};
use crate::oracle::OracleManager;
use crate::runtime::{Clock, RuntimeConfig};

/// Commands that can be sent to the encounter worker
pub enum Command {
    /// Spawn a monster and start a fresh encounter.
    Start {
        player: PlayerState,
        monster: String,
        seed: u64,
        reply: oneshot::Sender<Result<Progress>>,
    },
    Player {
        command: PlayerCommand,
        reply: oneshot::Sender<Result<Progress>>,
    },
    Tick {
        reply: oneshot::Sender<Result<Progress>>,
    },
    Snapshot {
        reply: oneshot::Sender<Option<EncounterSnapshot>>,
    },
    Narrative {
        phase: NarrativePhase,
        ctx: NarrativeContext,
        reply: oneshot::Sender<Result<Option<ScriptPayload>>>,
    },
}

/// Background task that processes encounter commands.
pub struct EncounterWorker {
    encounter: Option<Encounter>,
    oracles: OracleManager,
    config: RuntimeConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    /// Paces ticks against wall time under [`Clock::Realtime`].
    pacer: Option<Interval>,
}

impl EncounterWorker {
    pub fn new(
        oracles: OracleManager,
        config: RuntimeConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::encounter",
            clock = ?config.clock,
            tick_millis = config.game.tick_millis,
            scripts = oracles.scripts().len(),
            "encounter worker initialized"
        );

        Self {
            encounter: None,
            oracles,
            config,
            command_rx,
            event_bus,
            pacer: None,
        }
    }

    /// Main worker loop. Exits once every handle is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!(target: "runtime::encounter", "command channel closed, worker exiting");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start {
                player,
                monster,
                seed,
                reply,
            } => {
                let result = self.start(player, &monster, seed);
                report("start", &result);
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Player { command, reply } => {
                let result = self.player_command(command);
                report("player", &result);
                if reply.send(result).is_err() {
                    debug!("Player reply channel closed (caller dropped)");
                }
            }
            Command::Tick { reply } => {
                if let Some(pacer) = self.pacer.as_mut() {
                    pacer.tick().await;
                }
                let result = self.tick();
                report("tick", &result);
                if reply.send(result).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                let snapshot = self.encounter.as_ref().map(Encounter::snapshot);
                if reply.send(snapshot).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Narrative { phase, ctx, reply } => {
                let result = self.narrative(phase, &ctx);
                report("narrative", &result);
                if reply.send(result).is_err() {
                    debug!("Narrative reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn start(&mut self, player: PlayerState, monster: &str, seed: u64) -> Result<Progress> {
        if let Some(current) = &self.encounter
            && current.phase() == EncounterPhase::Active
        {
            return Err(EncounterError::AlreadyActive(current.phase()).into());
        }

        let env = self.oracles.as_battle_env();
        let template = self.oracles.monster(monster)?;
        let mut encounter =
            Encounter::spawn(player, template, self.config.game.clone(), seed);
        let before = encounter.phase();
        let opening = encounter.start(&env)?;

        info!(
            target: "runtime::encounter",
            monster,
            seed,
            player = %encounter.player().name,
            "encounter started"
        );

        let outcomes = vec![opening];
        publish(&self.event_bus, &encounter, before, &outcomes);
        let view = view_of(&encounter, &self.oracles)?;
        self.encounter = Some(encounter);
        self.pacer = self.new_pacer();

        Ok(Progress { outcomes, view })
    }

    fn player_command(&mut self, command: PlayerCommand) -> Result<Progress> {
        let encounter = self.encounter.as_mut().ok_or(RuntimeError::NoEncounter)?;
        let env = self.oracles.as_battle_env();
        let before = encounter.phase();
        let outcome = encounter.command(&env, command)?;

        debug!(target: "runtime::encounter", %command, noop = outcome.is_noop(), "player command");

        let outcomes = vec![outcome];
        publish(&self.event_bus, encounter, before, &outcomes);
        Ok(Progress {
            outcomes,
            view: view_of(encounter, &self.oracles)?,
        })
    }

    fn tick(&mut self) -> Result<Progress> {
        let encounter = self.encounter.as_mut().ok_or(RuntimeError::NoEncounter)?;
        let env = self.oracles.as_battle_env();
        let before = encounter.phase();
        let outcomes = encounter.tick(&env)?;

        publish(&self.event_bus, encounter, before, &outcomes);
        Ok(Progress {
            outcomes,
            view: view_of(encounter, &self.oracles)?,
        })
    }

    fn narrative(
        &self,
        phase: NarrativePhase,
        ctx: &NarrativeContext,
    ) -> Result<Option<ScriptPayload>> {
        let encounter = self.encounter.as_ref().ok_or(RuntimeError::NoEncounter)?;
        let payload = encounter.narrative_hook(self.oracles.narrative(), ctx, phase);

        if let Some(payload) = &payload {
            info!(
                target: "runtime::narrative",
                script = %payload.id,
                %phase,
                "story script fired"
            );
            self.event_bus.publish(Event::Narrative {
                phase,
                payload: payload.clone(),
            });
        }
        Ok(payload)
    }

    fn new_pacer(&self) -> Option<Interval> {
        match self.config.clock {
            Clock::Virtual => None,
            Clock::Realtime => {
                let period = u64::from(self.config.game.tick_millis.max(1));
                let mut pacer = tokio::time::interval(Duration::from_millis(period));
                pacer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Some(pacer)
            }
        }
    }
}

/// Logs a rejected command with its classification before the reply goes out.
fn report<T>(command: &'static str, result: &Result<T>) {
    let Err(err) = result else { return };
    let severity = err.severity();
    if severity.is_recoverable() {
        debug!(
            target: "runtime::encounter",
            command,
            severity = severity.as_str(),
            code = err.error_code(),
            error = %err,
            "command rejected"
        );
    } else {
        warn!(
            target: "runtime::encounter",
            command,
            severity = severity.as_str(),
            code = err.error_code(),
            error = %err,
            "command failed"
        );
    }
}

fn view_of(encounter: &Encounter, oracles: &OracleManager) -> Result<EncounterView> {
    let env = oracles.as_battle_env();
    Ok(EncounterView {
        snapshot: encounter.snapshot(),
        player_stats: encounter.player_stats(&env)?,
    })
}

/// Publishes applied outcomes, then the phase change they caused.
fn publish(
    bus: &EventBus,
    encounter: &Encounter,
    before: EncounterPhase,
    outcomes: &[ActionOutcome],
) {
    for outcome in outcomes {
        bus.publish(Event::Outcome {
            nonce: encounter.nonce(),
            elapsed_millis: encounter.elapsed_millis(),
            outcome: outcome.clone(),
        });
    }

    let after = encounter.phase();
    if after != before {
        info!(
            target: "runtime::encounter",
            from = %before,
            to = %after,
            elapsed_millis = encounter.elapsed_millis(),
            "phase changed"
        );
        bus.publish(Event::PhaseChanged {
            from: before,
            to: after,
            elapsed_millis: encounter.elapsed_millis(),
        });
    }
}
