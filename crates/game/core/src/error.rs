//! Error classification shared by every battle crate.
//!
//! Combat itself has no failure path: invalid preconditions (acting while
//! stunned, a potion at zero charges, refining past the cap) are policy
//! rejections expressed as no-op outcomes. The errors classified here cover
//! data integrity (unknown content ids) and controller misuse.

/// How a caller should treat a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Retrying after a state change may succeed (start an encounter first).
    Recoverable,
    /// The request names something that does not exist.
    Validation,
    /// Plumbing between runtime pieces broke.
    Internal,
    /// Content or wiring is unusable until fixed.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label used as a log field.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_recoverable(self) -> bool {
        self == Self::Recoverable
    }

    /// True when the failure points at a bug or broken setup rather than the request.
    pub fn is_internal(self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum so callers can log and branch uniformly.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable upper-snake identifier for the variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EncounterError, EncounterPhase, OracleError};

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.to_string(), "fatal");
    }

    #[test]
    fn encounter_errors_wrap_oracle_classification() {
        let idle = EncounterError::NotActive(EncounterPhase::Idle);
        assert!(idle.severity().is_recoverable());
        assert_eq!(idle.error_code(), "ENCOUNTER_NOT_ACTIVE");

        let missing = OracleError::MonsterNotFound("mimic".into());
        let wrapped = EncounterError::from(missing.clone());
        assert_eq!(wrapped.severity(), missing.severity());
        assert_eq!(wrapped.error_code(), missing.error_code());
    }
}
