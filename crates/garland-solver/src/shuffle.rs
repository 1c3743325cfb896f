// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Randomized permutation sampling (phase 1).
//!
//! Shuffle a target vector uniformly, pair it position-wise with the roster
//! order, and accept the first permutation in which every pair passes the
//! constraint predicate. The number of attempts is bounded; exhausting the
//! bound is not a verdict, only a signal to fall through to the exact phase.

use crate::constraint::ConstraintSet;
use garland_model::index::ParticipantIndex;
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

/// A bounded uniform sampler over candidate permutations.
///
/// The RNG is injected by the caller; the sampler never seeds one itself, so
/// callers needing reproducibility stay in control of the randomness source.
#[derive(Debug)]
pub struct PermutationSampler<R> {
    rng: R,
    attempts: usize,
}

impl<R> PermutationSampler<R>
where
    R: Rng,
{
    /// Creates a sampler that will try at most `attempts` shuffles.
    #[inline]
    pub fn new(rng: R, attempts: usize) -> Self {
        Self { rng, attempts }
    }

    /// Returns the attempt bound.
    #[inline]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Samples permutations until one satisfies `constraints` or the attempt
    /// bound is exhausted.
    ///
    /// Returns the accepted giver-indexed target vector, or `None` if every
    /// attempt was rejected.
    pub fn sample(&mut self, constraints: &ConstraintSet<'_>) -> Option<Vec<ParticipantIndex>> {
        let mut targets: Vec<ParticipantIndex> = (0..constraints.num_participants())
            .map(ParticipantIndex::new)
            .collect();

        for attempt in 0..self.attempts {
            targets.shuffle(&mut self.rng);
            if satisfies(constraints, &targets) {
                debug!(attempt, "randomized phase accepted a permutation");
                return Some(targets);
            }
        }

        None
    }
}

/// Checks a giver-indexed target vector pair-by-pair against the predicate.
#[inline]
fn satisfies(constraints: &ConstraintSet<'_>, targets: &[ParticipantIndex]) -> bool {
    targets
        .iter()
        .enumerate()
        .all(|(giver, recipient)| constraints.permits(ParticipantIndex::new(giver), *recipient))
}
