//! Soft-cap curves shared by every attribute.
//!
//! ```text
//! points   1..=20   21..=40   41..=60   61..
//! corr     2.5%     1.5%      0.5%      0.1%   (per point, summed)
//! ```

use crate::combat::damage::floor_u32;

const TIER_WIDTH: u32 = 20;
const CORRECTION_RATES: [f64; 4] = [0.025, 0.015, 0.005, 0.001];
const STR_ATK_RATES: [f64; 4] = [1.0, 0.5, 0.0, 0.0];
const INT_MATK_RATES: [f64; 4] = [2.0, 1.0, 0.5, 0.2];

/// Splits `points` into the three 20-point tiers plus the remainder.
fn tiers(points: u32) -> [u32; 4] {
    let first = points.min(TIER_WIDTH);
    let second = points.saturating_sub(TIER_WIDTH).min(TIER_WIDTH);
    let third = points.saturating_sub(2 * TIER_WIDTH).min(TIER_WIDTH);
    let rest = points.saturating_sub(3 * TIER_WIDTH);
    [first, second, third, rest]
}

fn weighted(points: u32, rates: [f64; 4]) -> f64 {
    tiers(points)
        .iter()
        .zip(rates)
        .map(|(&count, rate)| f64::from(count) * rate)
        .sum()
}

/// Multiplicative correction granted by `points` of one attribute.
pub fn correction(points: u32) -> f64 {
    weighted(points, CORRECTION_RATES)
}

/// Flat attack from strength: +1 per point up to 20, +0.5 up to 40.
pub fn str_atk_bonus(strength: u32) -> u32 {
    floor_u32(weighted(strength, STR_ATK_RATES))
}

/// Flat magic attack from intellect: +2 / +1 / +0.5 / +0.2 per point by tier.
pub fn int_matk_bonus(intellect: u32) -> u32 {
    floor_u32(weighted(intellect, INT_MATK_RATES))
}

/// Refinement: +10% of the base value per level, floored.
pub fn refined(base: u32, level: u8) -> u32 {
    let scaled = u64::from(base) * (10 + u64::from(level)) / 10;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn correction_tiers() {
        assert!(approx(correction(0), 0.0));
        assert!(approx(correction(20), 0.5));
        assert!(approx(correction(40), 0.8));
        assert!(approx(correction(60), 0.9));
        assert!(approx(correction(70), 0.91));
    }

    #[test]
    fn strength_stops_adding_attack_after_forty() {
        assert_eq!(str_atk_bonus(10), 10);
        assert_eq!(str_atk_bonus(25), 22);
        assert_eq!(str_atk_bonus(40), 30);
        assert_eq!(str_atk_bonus(90), 30);
    }

    #[test]
    fn intellect_tiers() {
        assert_eq!(int_matk_bonus(10), 20);
        assert_eq!(int_matk_bonus(30), 50);
        assert_eq!(int_matk_bonus(65), 71);
    }

    #[test]
    fn refinement_scales_base() {
        assert_eq!(refined(15, 0), 15);
        assert_eq!(refined(15, 3), 19);
        assert_eq!(refined(10, 9), 19);
        assert_eq!(refined(7, 1), 7);
    }
}
