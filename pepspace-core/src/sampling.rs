use fxhash::FxHashSet;
use log::debug;
use rand::prelude::*;

use crate::consts::DEFAULT_BUDGET_FACTOR;
use crate::space::SequenceSpace;

///
/// Draws distinct sequences uniformly at random by bounded rejection
/// sampling.
///
/// Every draw picks each position's symbol independently and uniformly, so
/// each sequence of the space is equally likely. Duplicates are thrown away.
/// The number of draws is capped at `budget_factor * n`; when the cap is hit
/// first, the sequences collected so far are returned. That is the normal
/// outcome when `n` is close to the size of the space, not an error.
///
pub struct RandomSampler<R: Rng = StdRng> {
    rng: R,
    budget_factor: usize,
}

impl RandomSampler<StdRng> {
    /// A sampler seeded from `seed`, or from the OS when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomSampler::with_rng(rng)
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomSampler {
            rng,
            budget_factor: DEFAULT_BUDGET_FACTOR,
        }
    }

    pub fn with_budget_factor(mut self, budget_factor: usize) -> Self {
        self.budget_factor = budget_factor;
        self
    }

    /// One uniform draw from the space.
    pub fn draw(&mut self, space: &SequenceSpace) -> String {
        let indices: Vec<usize> = space
            .positions()
            .iter()
            .map(|alphabet| self.rng.random_range(0..alphabet.len()))
            .collect();
        space.compose(&indices)
    }

    ///
    /// Sample up to `n` distinct sequences, sorted by string order.
    ///
    /// # Arguments
    /// - space: the space to draw from
    /// - n: number of sequences wanted; clamped to the size of the space
    pub fn sample(&mut self, space: &SequenceSpace, n: usize) -> Vec<String> {
        let n = match space.total_usize() {
            Some(total) => n.min(total),
            None => n,
        };
        let budget = n.saturating_mul(self.budget_factor);

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut attempts = 0;
        while seen.len() < n && attempts < budget {
            seen.insert(self.draw(space));
            attempts += 1;
        }

        debug!(
            "Sampled {} of {} requested sequences in {} draws (budget {})",
            seen.len(),
            n,
            attempts,
            budget
        );

        let mut sequences: Vec<String> = seen.into_iter().collect();
        sequences.sort_unstable();
        sequences
    }
}
