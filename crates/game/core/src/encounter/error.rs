//! Controller misuse errors.

use crate::encounter::EncounterPhase;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors returned by [`super::Encounter`].
///
/// Rejected actions (cooldowns, empty flasks, stuns) are not errors; they come
/// back as no-op outcomes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("encounter is not active (phase: {0})")]
    NotActive(EncounterPhase),

    #[error("encounter already started (phase: {0})")]
    AlreadyActive(EncounterPhase),

    #[error("invalid loadout: {0}")]
    Oracle(#[from] OracleError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActive(_) | Self::AlreadyActive(_) => ErrorSeverity::Recoverable,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActive(_) => "ENCOUNTER_NOT_ACTIVE",
            Self::AlreadyActive(_) => "ENCOUNTER_ALREADY_ACTIVE",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
