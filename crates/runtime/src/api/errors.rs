//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, encounter control and content
//! lookups so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{EncounterError, ErrorSeverity, GameError, OracleError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("action provider not set")]
    ProviderNotSet,

    #[error("encounter worker command channel closed")]
    CommandChannelClosed,

    #[error("encounter worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("encounter worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("no encounter has been started")]
    NoEncounter,

    #[error("encounter did not finish within {ticks} ticks")]
    TickLimit { ticks: u64 },

    #[error(transparent)]
    Encounter(#[from] EncounterError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("failed to encode or decode JSON snapshot")]
    SnapshotJson(#[source] serde_json::Error),

    #[error("failed to encode or decode bincode snapshot")]
    SnapshotBincode(#[source] bincode::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoEncounter | Self::TickLimit { .. } => ErrorSeverity::Recoverable,
            Self::ProviderNotSet | Self::MissingOracles => ErrorSeverity::Fatal,
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                ErrorSeverity::Internal
            }
            Self::SnapshotJson(_) | Self::SnapshotBincode(_) => ErrorSeverity::Validation,
            Self::Encounter(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet => "RUNTIME_PROVIDER_NOT_SET",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::NoEncounter => "RUNTIME_NO_ENCOUNTER",
            Self::TickLimit { .. } => "RUNTIME_TICK_LIMIT",
            Self::SnapshotJson(_) => "RUNTIME_SNAPSHOT_JSON",
            Self::SnapshotBincode(_) => "RUNTIME_SNAPSHOT_BINCODE",
            Self::Encounter(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EncounterPhase;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let again = RuntimeError::from(EncounterError::AlreadyActive(EncounterPhase::Active));
        assert_eq!(again.error_code(), "ENCOUNTER_ALREADY_ACTIVE");
        assert!(again.severity().is_recoverable());

        let missing = RuntimeError::from(OracleError::MonsterNotFound("mimic".into()));
        assert_eq!(missing.error_code(), "ORACLE_MONSTER_NOT_FOUND");
        assert_eq!(missing.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn runtime_variants_classify_by_recoverability() {
        assert!(RuntimeError::NoEncounter.severity().is_recoverable());
        assert_eq!(RuntimeError::NoEncounter.error_code(), "RUNTIME_NO_ENCOUNTER");
        assert!(RuntimeError::TickLimit { ticks: 3 }.severity().is_recoverable());
        assert!(RuntimeError::CommandChannelClosed.severity().is_internal());
        assert!(RuntimeError::MissingOracles.severity().is_internal());
    }
}
