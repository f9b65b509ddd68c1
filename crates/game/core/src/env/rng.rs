//! Seeded dice for combat.
//!
//! Every chance check in combat (weapon passive triggers, crits, dodges,
//! on-hit affixes, flee) draws from a [`Rolls`] cursor. A cursor is keyed by
//! the game seed, the encounter action nonce and the acting side, and each
//! draw advances a context counter, so the same seed always replays the same
//! sequence of outcomes.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::combat::Side;

/// Pure function from a 64-bit seed to a 32-bit draw.
///
/// Equal seeds must give equal draws; [`Rolls`] relies on this for replay.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// One PCG-XSH-RR step applied to the seed as state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

const PCG_MUL: u64 = 6_364_136_223_846_793_005;
const PCG_INC: u64 = 1_442_695_040_888_963_407;

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed.wrapping_mul(PCG_MUL).wrapping_add(PCG_INC);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        xorshifted.rotate_right((state >> 59) as u32)
    }
}

/// Scripted RNG that replays a fixed list of values in order, wrapping around.
///
/// Used by tests and tooling to pin every chance branch:
/// [`FixedRng::always_succeed`] makes every chance with a positive probability
/// pass, [`FixedRng::always_fail`] makes every chance below 1.0 fail.
#[derive(Debug)]
pub struct FixedRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl FixedRng {
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Builds the script from unit values in `[0, 1]`.
    pub fn from_units(units: &[f64]) -> Self {
        let values = units
            .iter()
            .map(|unit| (unit.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32)
            .collect();
        Self::new(values)
    }

    pub fn always(value: u32) -> Self {
        Self::new(vec![value])
    }

    pub fn always_succeed() -> Self {
        Self::always(0)
    }

    pub fn always_fail() -> Self {
        Self::always(u32::MAX)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

/// Mixes the run seed, action nonce, acting side and draw index into one seed.
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, draw: u32) -> u64 {
    let mixed = game_seed
        ^ nonce.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ u64::from(actor_id).wrapping_mul(0x517c_c1b7_2722_0a95)
        ^ u64::from(draw).wrapping_mul(0x85eb_ca6b);
    finalize(mixed)
}

/// Murmur3 64-bit finalizer.
fn finalize(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^ (h >> 33)
}

/// Sequential draw cursor for one resolver invocation.
///
/// Each call consumes exactly one draw, so evaluation order fully determines
/// which value answers which question.
pub struct Rolls<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    actor: Side,
    cursor: u32,
}

impl<'a> Rolls<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64, actor: Side) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
            actor,
            cursor: 0,
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        let seed = compute_seed(self.game_seed, self.nonce, self.actor.id(), self.cursor);
        self.cursor = self.cursor.wrapping_add(1);
        self.rng.unit(seed)
    }

    /// Returns true with the given probability. Probabilities are clamped to `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        let probability = probability.clamp(0.0, 1.0);
        self.unit() < probability
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> u32 {
        self.cursor
    }
}

impl core::fmt::Debug for Rolls<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rolls")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .field("actor", &self.actor)
            .field("cursor", &self.cursor)
            .finish()
    }
}
