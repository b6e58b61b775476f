//! # Weighted & Bounded Randomness
//!
//! Lottery-style helpers: pick an index from a discrete distribution, or an
//! integer from a half-open range.
//!
//! **Not for secrets.** Everything here runs on [`StdRng`], a fast
//! non-cryptographic-grade choice for games and sampling. Key material
//! comes from `OsRng` in [`crate::crypto`], never from here.
//!
//! ## Generators
//!
//! Every helper takes the generator as an argument, so tests can pass a
//! seeded one and get reproducible draws. For callers that just want "a
//! random number", [`SharedRng::global`] is a single process-wide generator,
//! seeded once from OS entropy and guarded by a mutex so it can be used from
//! any thread. Seeding per call from the clock, as older code did, hands out
//! identical sequences to calls that land in the same clock tick.
//!
//! ## The index-0 fallback
//!
//! A weighted pick returns the smallest `i` whose cumulative interval
//! `[sum(w[..i]), sum(w[..=i]))` contains the sample. If none does (weights
//! summing to less than 1.0, or a NaN weight), the answer is index 0. That's
//! long-standing behavior callers depend on, so it is kept and logged at
//! `warn` rather than turned into an error. Make your weights cover `[0, 1)`.

use std::sync::OnceLock;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::warn;

/// Invalid arguments to the random helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("empty range: max ({max}) must be greater than min ({min})")]
    EmptyRange { min: i64, max: i64 },
}

/// Draw a uniform sample in `[0, 1)` from `rng` and pick a weighted index.
///
/// # Example
///
/// ```
/// use ikit::random::pick_weighted;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let idx = pick_weighted(&mut rng, &[0.2, 0.3, 0.5]);
/// assert!(idx < 3);
/// ```
pub fn pick_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f32]) -> usize {
    let sample: f32 = rng.gen();
    pick_weighted_with_sample(weights, sample)
}

/// Pick the index whose cumulative-weight interval contains `sample`.
///
/// Prefix sums are accumulated left to right in one pass. Falls back to 0
/// when no interval matches.
pub fn pick_weighted_with_sample(weights: &[f32], sample: f32) -> usize {
    let mut lower = 0.0f32;
    for (i, weight) in weights.iter().enumerate() {
        let upper = lower + weight;
        if sample >= lower && sample < upper {
            return i;
        }
        lower = upper;
    }

    warn!(sample, total = lower, "weighted pick matched no interval, falling back to index 0");
    0
}

/// Uniform integer in `[min, max)`.
pub fn bounded_random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, RandomError> {
    if max <= min {
        return Err(RandomError::EmptyRange { min, max });
    }
    Ok(rng.gen_range(min..max))
}

/// Weighted pick using the process-wide generator.
pub fn pick(weights: &[f32]) -> usize {
    SharedRng::global().pick_weighted(weights)
}

/// Bounded integer using the process-wide generator.
pub fn random_int(min: i64, max: i64) -> Result<i64, RandomError> {
    SharedRng::global().bounded_int(min, max)
}

// ---------------------------------------------------------------------------
// CumulativeWeights
// ---------------------------------------------------------------------------

/// Prefix sums of a weight list, built once for repeated picks.
///
/// Same selection rule and fallback as [`pick_weighted_with_sample`], but
/// each pick is a binary search instead of a linear scan. Assumes
/// non-negative weights; negative weights break the monotonic prefix the
/// search relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWeights {
    /// `bounds[i]` is the exclusive upper end of index `i`'s interval.
    bounds: Vec<f32>,
}

impl CumulativeWeights {
    pub fn new(weights: &[f32]) -> Self {
        let mut total = 0.0f32;
        let bounds = weights
            .iter()
            .map(|w| {
                total += w;
                total
            })
            .collect();
        Self { bounds }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f32 {
        self.bounds.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick_with_sample(rng.gen())
    }

    pub fn pick_with_sample(&self, sample: f32) -> usize {
        // First interval whose upper bound lies above the sample.
        let i = self.bounds.partition_point(|&upper| upper <= sample);
        let lower = if i == 0 { 0.0 } else { self.bounds[i - 1] };
        if i < self.bounds.len() && sample >= lower {
            return i;
        }

        warn!(sample, total = self.total(), "weighted pick matched no interval, falling back to index 0");
        0
    }
}

// ---------------------------------------------------------------------------
// SharedRng
// ---------------------------------------------------------------------------

/// A mutex-guarded [`StdRng`] that can be shared across threads.
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<StdRng>,
}

impl SharedRng {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator, for tests and reproducible simulations.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The process-wide generator, seeded on first use.
    pub fn global() -> &'static SharedRng {
        static GLOBAL: OnceLock<SharedRng> = OnceLock::new();
        GLOBAL.get_or_init(SharedRng::from_entropy)
    }

    pub fn pick_weighted(&self, weights: &[f32]) -> usize {
        pick_weighted(&mut *self.inner.lock(), weights)
    }

    pub fn bounded_int(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        bounded_random_int(&mut *self.inner.lock(), min, max)
    }
}
