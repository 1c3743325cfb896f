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

//! Exact fallback via maximum bipartite matching (phase 2).
//!
//! The instance is modeled as a bipartite graph with the participant set on
//! both sides: givers on the left, recipients on the right, an edge wherever
//! the constraint predicate permits the pairing. Kuhn's algorithm augments
//! one giver at a time, following existing matches backward when a recipient
//! is already taken and can be freed by rematching its current giver.
//!
//! A perfect matching is a complete permutation. Failing to match any giver
//! proves no valid assignment exists; this phase is the source of the
//! definitive unsatisfiability verdict.
//!
//! Recursion depth is bounded by the participant count, which is harmless at
//! the intended scale of tens to low hundreds of participants.

use crate::constraint::ConstraintSet;
use fixedbitset::FixedBitSet;
use garland_model::index::ParticipantIndex;

/// Kuhn augmenting-path matcher over the allowed-pairing graph.
#[derive(Debug, Clone)]
pub struct BipartiteMatcher {
    /// Allowed recipients per giver, in roster order.
    allowed: Vec<Vec<ParticipantIndex>>,
    /// Current giver matched to each recipient, if any.
    matched_giver: Vec<Option<ParticipantIndex>>,
    /// Recipients visited within one augmentation attempt.
    visited: FixedBitSet,
}

impl BipartiteMatcher {
    /// Builds the matcher's adjacency from the constraint predicate.
    pub fn new(constraints: &ConstraintSet<'_>) -> Self {
        let num_participants = constraints.num_participants();
        let allowed = (0..num_participants)
            .map(|giver| {
                constraints
                    .allowed_recipients(ParticipantIndex::new(giver))
                    .collect()
            })
            .collect();

        Self {
            allowed,
            matched_giver: vec![None; num_participants],
            visited: FixedBitSet::with_capacity(num_participants),
        }
    }

    /// Runs the matching to completion.
    ///
    /// Returns the giver-indexed target vector of a perfect matching, or
    /// `None` if some giver cannot be matched — in which case no valid
    /// assignment exists at all.
    pub fn into_perfect_matching(mut self) -> Option<Vec<ParticipantIndex>> {
        let num_participants = self.allowed.len();

        for giver in 0..num_participants {
            self.visited.clear();
            if !self.try_augment(ParticipantIndex::new(giver)) {
                return None;
            }
        }

        // Invert recipient -> giver into the giver-indexed form. Every
        // recipient is matched once all givers are.
        let mut targets = vec![ParticipantIndex::new(0); num_participants];
        for (recipient, giver) in self.matched_giver.iter().enumerate() {
            match giver {
                Some(giver) => targets[giver.get()] = ParticipantIndex::new(recipient),
                None => return None,
            }
        }
        Some(targets)
    }

    /// Depth-first search for an augmenting path starting at `giver`.
    ///
    /// Tries every allowed recipient not yet visited in this attempt. An
    /// unmatched recipient ends the path; a matched one is stolen if its
    /// current giver can be rerouted elsewhere.
    fn try_augment(&mut self, giver: ParticipantIndex) -> bool {
        for position in 0..self.allowed[giver.get()].len() {
            let recipient = self.allowed[giver.get()][position];
            if self.visited.contains(recipient.get()) {
                continue;
            }
            self.visited.insert(recipient.get());

            match self.matched_giver[recipient.get()] {
                None => {
                    self.matched_giver[recipient.get()] = Some(giver);
                    return true;
                }
                Some(current) => {
                    if self.try_augment(current) {
                        self.matched_giver[recipient.get()] = Some(giver);
                        return true;
                    }
                }
            }
        }
        false
    }
}
