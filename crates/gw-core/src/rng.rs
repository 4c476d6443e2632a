//! Deterministic per-entity and world-level RNG wrappers.
//!
//! Each entity gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (entity_id * MIXING_CONSTANT)
//!
//! so adding entities at the end of the list never disturbs the choices made
//! for existing ones, and runs are reproducible from the config seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EntityId, Point};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── EntityRng ─────────────────────────────────────────────────────────────────

/// Per-entity deterministic RNG.
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed and an entity ID.
    pub fn new(global_seed: u64, entity: EntityId) -> Self {
        let seed = global_seed ^ (entity.0 as u64).wrapping_mul(MIXING_CONSTANT);
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly random point in the rectangle spanned by `min` and `max`
    /// (both inclusive).  Returns `min` when the rectangle is inverted.
    pub fn point_within(&mut self, min: Point, max: Point) -> Point {
        if min.row > max.row || min.column > max.column {
            return min;
        }
        Point::new(
            self.0.gen_range(min.row..=max.row),
            self.0.gen_range(min.column..=max.column),
        )
    }
}

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// World-level RNG, used to derive per-entity generators.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child RNG for `entity` from the current world RNG state.
    pub fn entity(&mut self, entity: EntityId) -> EntityRng {
        let seed: u64 = self.0.r#gen();
        EntityRng::new(seed, entity)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
