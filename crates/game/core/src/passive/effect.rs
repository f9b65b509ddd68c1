use crate::ledger::StatusKind;

/// Named passive carried by an affix.
///
/// Values of the same effect on different equipped items add up. Chance
/// effects are clamped to 1 when read; immunities only check presence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassiveEffect {
    // ===== player on-hit =====
    LifeSteal,
    BleedOnHit,
    PoisonHit,
    BurnHit,
    FreezeHit,
    StunHit,
    FalconBlitz,

    // ===== player struck =====
    Thorns,
    BerserkOnHit,

    // ===== encounter start =====
    FirstStrike,
    StartShield,

    // ===== attack modifiers =====
    MaxMight,
    DefPierce,
    DoubleAttack,
    ExecuteDmg,
    SkillAmp,

    // ===== derived stats =====
    SpeedHaste,
    CritChance,
    CritDamage,
    DodgeChance,

    // ===== immunities =====
    PoisonImmune,
    BurnImmune,
    BleedImmune,
    FrozenImmune,
    StunImmune,
}

impl PassiveEffect {
    /// Immunity effect guarding against `status`.
    pub const fn immunity_for(status: StatusKind) -> Self {
        match status {
            StatusKind::Poison => Self::PoisonImmune,
            StatusKind::Burn => Self::BurnImmune,
            StatusKind::Bleed => Self::BleedImmune,
            StatusKind::Frozen => Self::FrozenImmune,
            StatusKind::Stun => Self::StunImmune,
        }
    }

    /// Status applied by an on-hit effect, if any.
    pub const fn inflicts(self) -> Option<StatusKind> {
        match self {
            Self::BleedOnHit => Some(StatusKind::Bleed),
            Self::PoisonHit => Some(StatusKind::Poison),
            Self::BurnHit => Some(StatusKind::Burn),
            Self::FreezeHit => Some(StatusKind::Frozen),
            Self::StunHit => Some(StatusKind::Stun),
            _ => None,
        }
    }

    pub const fn is_immunity(self) -> bool {
        matches!(
            self,
            Self::PoisonImmune
                | Self::BurnImmune
                | Self::BleedImmune
                | Self::FrozenImmune
                | Self::StunImmune
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_are_snake_case() {
        assert_eq!(PassiveEffect::LifeSteal.to_string(), "life_steal");
        assert_eq!(
            PassiveEffect::from_str("falcon_blitz").ok(),
            Some(PassiveEffect::FalconBlitz)
        );
    }

    #[test]
    fn every_status_has_an_immunity() {
        for status in StatusKind::iter() {
            assert!(PassiveEffect::immunity_for(status).is_immunity());
        }
    }
}
