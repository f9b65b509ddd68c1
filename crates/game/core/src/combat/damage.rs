//! Damage mitigation and elemental amplification.

/// Defense at which mitigation reaches 50%.
pub const MITIGATION_CONSTANT: f64 = 100.0;

/// Burn amplification per stack on the target.
pub const BURN_AMP_PER_STACK: f64 = 0.04;

// ============================================================================
// Mitigation
// ============================================================================

/// Mitigate `raw` offense against `defense`.
///
/// # Formula
///
/// ```text
/// damage = max(1, floor(raw × (1 − def / (def + 100))))
/// ```
///
/// Defense approaches but never reaches full mitigation, so every hit deals at
/// least one point. Negative defense is treated as zero.
pub fn calculate_damage(raw: f64, defense: f64) -> u32 {
    let defense = defense.max(0.0);
    let mitigated = raw * (1.0 - defense / (defense + MITIGATION_CONSTANT));
    floor_u32(mitigated).max(1)
}

/// Defense-reversal: the target's defense feeds the hit instead of blocking it.
///
/// ```text
/// damage = floor(raw × (1 + def / (def + 100)))
/// ```
pub fn reversed_damage(raw: f64, defense: f64) -> u32 {
    let defense = defense.max(0.0);
    floor_u32(raw * (1.0 + defense / (defense + MITIGATION_CONSTANT))).max(1)
}

/// `1 + 0.04 × stacks`.
pub fn burn_multiplier(burn_stacks: u8) -> f64 {
    1.0 + BURN_AMP_PER_STACK * f64::from(burn_stacks)
}

// ============================================================================
// Hit Pipeline
// ============================================================================

/// Target-side and attacker-side modifiers for one mitigated hit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitModifiers {
    pub burn_stacks: u8,
    pub frozen: bool,
    /// Extra raw fraction applied when the execute condition holds.
    pub execute_bonus: Option<f64>,
    /// Fraction of the target's defense ignored, clamped to `[0, 1]`.
    pub penetration: f64,
    pub defense_reverse: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitResolution {
    pub damage: u32,
    /// The frozen entry must be removed by the caller.
    pub shattered: bool,
    pub executed: bool,
}

/// Resolve one mitigated hit through the elemental interaction order.
///
/// # Algorithm
///
/// ```text
/// amplified = raw × (1 + 0.04 × burn) × (1 + execute)
/// effective_def = def × (1 − penetration)
/// dealt = reverse ? reversed(amplified, def) : calculate_damage(amplified, effective_def)
/// if frozen: dealt ×= 2
/// ```
///
/// Shatter doubles the final integer so the frozen hit is exactly twice the
/// damage the same hit would deal unfrozen.
pub fn resolve_hit(raw: f64, defense: f64, mods: HitModifiers) -> HitResolution {
    let mut amplified = raw * burn_multiplier(mods.burn_stacks);
    if let Some(bonus) = mods.execute_bonus {
        amplified *= 1.0 + bonus;
    }

    let dealt = if mods.defense_reverse {
        reversed_damage(amplified, defense)
    } else {
        let penetration = mods.penetration.clamp(0.0, 1.0);
        calculate_damage(amplified, defense * (1.0 - penetration))
    };

    HitResolution {
        damage: if mods.frozen { dealt.saturating_mul(2) } else { dealt },
        shattered: mods.frozen,
        executed: mods.execute_bonus.is_some(),
    }
}

/// Skill and art damage bypasses mitigation but still burns and shatters.
///
/// ```text
/// floor(base × (1 + 0.04 × burn)), then × 2 if frozen
/// ```
pub fn amplify_unmitigated(base: u32, burn_stacks: u8, frozen: bool) -> u32 {
    let burned = if burn_stacks > 0 {
        floor_u32(f64::from(base) * burn_multiplier(burn_stacks))
    } else {
        base
    };
    if frozen { burned.saturating_mul(2) } else { burned }
}

/// Floor a non-negative value into `u32`, saturating at the bounds.
pub(crate) fn floor_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value.floor() as u32
    }
}
