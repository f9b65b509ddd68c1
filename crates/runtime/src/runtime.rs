//! Composition root for a battle session.
//!
//! [`RuntimeBuilder::build`] spawns the encounter worker on the current tokio
//! runtime and returns a [`Runtime`] that owns its join handle.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use battle_core::{GameConfig, PlayerState};

use crate::api::{ActionProvider, EncounterSummary, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;
use crate::workers::EncounterWorker;

/// How simulated time relates to wall time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Clock {
    /// Each tick waits for `tick_millis` of wall time.
    Realtime,
    /// Ticks run as fast as they are requested.
    #[default]
    Virtual,
}

/// Channel sizes, pacing and limits for one runtime instance.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Rules handed to every encounter the worker spawns.
    pub game: GameConfig,
    /// Buffered events per topic before slow subscribers lag.
    pub event_capacity: usize,
    /// Pending requests before handle calls wait.
    pub command_capacity: usize,
    pub clock: Clock,
    /// Upper bound on ticks per [`RuntimeHandle::run_encounter`] call.
    pub max_ticks: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            game: GameConfig::default(),
            event_capacity: 100,
            command_capacity: 32,
            clock: Clock::default(),
            max_ticks: 100_000,
        }
    }
}

/// Owns the worker task and an optional default [`ActionProvider`].
///
/// Clone [`Runtime::handle`] to drive the worker from other tasks.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Option<Arc<dyn ActionProvider>>,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::default()
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Runs one encounter to completion with the configured provider.
    pub async fn run_encounter(
        &self,
        player: PlayerState,
        monster: impl Into<String>,
        seed: u64,
    ) -> Result<EncounterSummary> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;
        self.handle
            .run_encounter(provider.as_ref(), player, monster, seed)
            .await
    }

    /// Replaces the provider used by [`Runtime::run_encounter`].
    pub fn set_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.provider = Some(Arc::new(provider));
    }

    /// Closes the command channel and waits for the worker to drain.
    ///
    /// Outstanding handle clones keep the worker alive; drop them first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Collects oracles, config and provider before spawning the worker.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    provider: Option<Arc<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    pub fn config(self, config: RuntimeConfig) -> Self {
        Self { config, ..self }
    }

    pub fn clock(mut self, clock: Clock) -> Self {
        self.config.clock = clock;
        self
    }

    /// Required; [`RuntimeBuilder::build`] fails with `MissingOracles` otherwise.
    pub fn oracles(self, oracles: OracleManager) -> Self {
        Self {
            oracles: Some(oracles),
            ..self
        }
    }

    /// Default provider for [`Runtime::run_encounter`].
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            oracles,
            provider,
        } = self;
        let oracles = oracles.ok_or(RuntimeError::MissingOracles)?;

        let events = EventBus::with_capacity(config.event_capacity);
        let (tx, rx) = mpsc::channel(config.command_capacity.max(1));
        let max_ticks = config.max_ticks;

        let worker = EncounterWorker::new(oracles, config, rx, events.clone());
        Ok(Runtime {
            handle: RuntimeHandle::new(tx, events, max_ticks),
            provider,
            worker_handle: tokio::spawn(worker.run()),
        })
    }
}
