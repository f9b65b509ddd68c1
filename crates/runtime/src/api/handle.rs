//! Async request API over the encounter worker's command channel.
//!
//! Every call sends one [`Command`] carrying a oneshot reply sender and waits
//! for the worker's answer.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{
    EncounterSnapshot, NarrativeContext, NarrativePhase, PlayerCommand, PlayerState,
    ScriptPayload,
};

use super::{ActionProvider, EncounterSummary, Progress, Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Cheap to clone; every clone talks to the same worker.
#[derive(Clone)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<Command>,
    events: EventBus,
    max_ticks: u64,
}

impl RuntimeHandle {
    pub(crate) fn new(commands: mpsc::Sender<Command>, events: EventBus, max_ticks: u64) -> Self {
        RuntimeHandle {
            commands,
            events,
            max_ticks,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(build(tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Spawns `monster` and starts a new encounter. Replaces a finished one.
    pub async fn start_encounter(
        &self,
        player: PlayerState,
        monster: impl Into<String>,
        seed: u64,
    ) -> Result<Progress> {
        let monster = monster.into();
        self.request(|reply| Command::Start {
            player,
            monster,
            seed,
            reply,
        })
        .await?
    }

    /// Advances the encounter by one tick.
    pub async fn tick(&self) -> Result<Progress> {
        self.request(|reply| Command::Tick { reply }).await?
    }

    pub async fn command(&self, command: PlayerCommand) -> Result<Progress> {
        self.request(|reply| Command::Player { command, reply }).await?
    }

    /// Current encounter state, if one was ever started.
    pub async fn snapshot(&self) -> Result<Option<EncounterSnapshot>> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Checks story scripts for the current player at `phase`.
    pub async fn narrative(
        &self,
        phase: NarrativePhase,
        ctx: NarrativeContext,
    ) -> Result<Option<ScriptPayload>> {
        self.request(|reply| Command::Narrative { phase, ctx, reply })
            .await?
    }

    /// Starts an encounter and drives it to a terminal phase.
    ///
    /// Before every tick the provider may issue one command. Fails with
    /// [`RuntimeError::TickLimit`] if the fight outlasts the configured
    /// tick budget.
    pub async fn run_encounter(
        &self,
        provider: &dyn ActionProvider,
        player: PlayerState,
        monster: impl Into<String>,
        seed: u64,
    ) -> Result<EncounterSummary> {
        let Progress {
            mut outcomes,
            mut view,
        } = self.start_encounter(player, monster, seed).await?;
        let mut ticks = 0u64;

        while !view.is_over() {
            if ticks >= self.max_ticks {
                return Err(RuntimeError::TickLimit { ticks });
            }

            if let Some(command) = provider.decide(&view).await? {
                let progress = self.command(command).await?;
                outcomes.extend(progress.outcomes);
                view = progress.view;
                if view.is_over() {
                    break;
                }
            }

            let progress = self.tick().await?;
            ticks += 1;
            outcomes.extend(progress.outcomes);
            view = progress.view;
        }

        Ok(EncounterSummary {
            phase: view.phase(),
            ticks,
            elapsed_millis: view.snapshot.elapsed_millis,
            outcomes,
            view,
        })
    }

    /// Events published on `topic` from now on.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }
}
