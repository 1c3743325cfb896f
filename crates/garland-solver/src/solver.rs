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

//! # Two-Phase Assignment Solver
//!
//! Orchestrates the randomized sampling phase and the exact matching
//! fallback behind one configuration surface. The randomized phase never
//! returns a result the exact phase would reject, because both check
//! candidates through the same [`ConstraintSet`] predicate; the exact phase
//! is complete, so a failure after it is a proof that no valid assignment
//! exists.
//!
//! ## Usage
//!
//! ```rust
//! use garland_model::{entry::ParticipantEntry, roster::Roster};
//! use garland_solver::solver::SolverBuilder;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let roster = Roster::from_entries(&[
//!     ParticipantEntry::named("Pat"),
//!     ParticipantEntry::named("Lee"),
//!     ParticipantEntry::named("Sam"),
//! ])
//! .unwrap();
//!
//! let mut solver = SolverBuilder::new()
//!     .with_rng(StdRng::seed_from_u64(42))
//!     .build();
//!
//! let assignment = solver.solve(&roster).unwrap();
//! assert_eq!(assignment.len(), 3);
//! ```

use crate::{constraint::ConstraintSet, matching::BipartiteMatcher, shuffle::PermutationSampler};
use garland_model::{assignment::Assignment, roster::Roster};
use rand::{rngs::ThreadRng, Rng};
use tracing::debug;

/// The default bound on randomized attempts before falling back to exact
/// matching. A performance/coverage trade-off, not a law; tune it through
/// [`SolverBuilder::with_attempt_budget`].
pub const DEFAULT_ATTEMPT_BUDGET: usize = 2000;

/// The error returned when no valid assignment exists.
///
/// Only raised after the exact matching phase has exhausted every
/// possibility, so it is a definitive verdict rather than a sampling
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsatisfiableError {
    participants: usize,
}

impl UnsatisfiableError {
    #[inline]
    fn new(participants: usize) -> Self {
        Self { participants }
    }

    /// Returns the number of participants in the unsatisfiable instance.
    #[inline]
    pub fn participants(&self) -> usize {
        self.participants
    }
}

impl std::fmt::Display for UnsatisfiableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no valid mapping exists for the given {} participants and constraints",
            self.participants
        )
    }
}

impl std::error::Error for UnsatisfiableError {}

/// The two-phase assignment solver.
///
/// Holds the injected randomness source and the solve configuration. Each
/// call to [`Solver::solve`] is independent and self-contained.
#[derive(Debug)]
pub struct Solver<R> {
    rng: R,
    attempt_budget: usize,
    ban_self: bool,
}

impl Solver<ThreadRng> {
    /// Creates a solver with the default configuration and the thread RNG.
    #[inline]
    pub fn new() -> Self {
        SolverBuilder::new().build()
    }
}

impl Default for Solver<ThreadRng> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Solver<R>
where
    R: Rng,
{
    /// Returns the randomized-phase attempt budget.
    #[inline]
    pub fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }

    /// Returns `true` if self-assignment is forbidden.
    #[inline]
    pub fn bans_self(&self) -> bool {
        self.ban_self
    }

    /// Produces a giver-to-recipient permutation over `roster`.
    ///
    /// Runs the bounded randomized phase first and falls back to the exact
    /// matching phase when the budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`UnsatisfiableError`] if no permutation satisfies the
    /// constraints. An empty roster yields the empty assignment.
    pub fn solve(&mut self, roster: &Roster) -> Result<Assignment, UnsatisfiableError> {
        if roster.is_empty() {
            return Ok(Assignment::empty());
        }

        let constraints = ConstraintSet::new(roster, self.ban_self);

        // A participant with no admissible recipient dooms both phases;
        // report it without burning the attempt budget.
        let unassignable = roster
            .indices()
            .any(|giver| constraints.allowed_recipients(giver).next().is_none());
        if unassignable {
            debug!("a participant has no admissible recipient");
            return Err(UnsatisfiableError::new(roster.len()));
        }

        let mut sampler = PermutationSampler::new(&mut self.rng, self.attempt_budget);
        if let Some(targets) = sampler.sample(&constraints) {
            return Ok(Assignment::new(targets));
        }

        debug!(
            budget = self.attempt_budget,
            "randomized phase exhausted its budget, falling back to exact matching"
        );

        match BipartiteMatcher::new(&constraints).into_perfect_matching() {
            Some(targets) => Ok(Assignment::new(targets)),
            None => Err(UnsatisfiableError::new(roster.len())),
        }
    }
}

/// Builder for [`Solver`], following the crate's `with_*` configuration
/// convention.
#[derive(Debug)]
pub struct SolverBuilder<R> {
    rng: R,
    attempt_budget: usize,
    ban_self: bool,
}

impl SolverBuilder<ThreadRng> {
    /// Creates a builder with the default attempt budget, self-assignment
    /// banned, and the thread RNG.
    #[inline]
    pub fn new() -> Self {
        Self {
            rng: rand::rng(),
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            ban_self: true,
        }
    }
}

impl Default for SolverBuilder<ThreadRng> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SolverBuilder<R>
where
    R: Rng,
{
    /// Sets the randomized-phase attempt budget. A budget of zero skips the
    /// randomized phase entirely.
    #[inline]
    pub fn with_attempt_budget(mut self, attempts: usize) -> Self {
        self.attempt_budget = attempts;
        self
    }

    /// Sets whether participants may be assigned to themselves.
    #[inline]
    pub fn with_ban_self(mut self, ban_self: bool) -> Self {
        self.ban_self = ban_self;
        self
    }

    /// Replaces the randomness source. Inject a seeded RNG for reproducible
    /// runs and deterministic tests.
    #[inline]
    pub fn with_rng<R2>(self, rng: R2) -> SolverBuilder<R2>
    where
        R2: Rng,
    {
        SolverBuilder {
            rng,
            attempt_budget: self.attempt_budget,
            ban_self: self.ban_self,
        }
    }

    /// Builds the solver.
    #[inline]
    pub fn build(self) -> Solver<R> {
        Solver {
            rng: self.rng,
            attempt_budget: self.attempt_budget,
            ban_self: self.ban_self,
        }
    }
}
