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

use crate::{index::ParticipantIndex, roster::Roster};

/// The final giver-to-recipient mapping produced by the solver.
///
/// Stored as a flat vector indexed by giver position: `targets[g]` is the
/// recipient assigned to giver `g`. The constructor enforces that the vector
/// is a permutation of `0..len`, so every participant appears exactly once
/// as a giver and exactly once as a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    targets: Vec<ParticipantIndex>,
}

impl Assignment {
    /// Constructs a new `Assignment` from a giver-indexed target vector.
    ///
    /// # Panics
    ///
    /// Panics if `targets` is not a permutation of `0..targets.len()`.
    pub fn new(targets: Vec<ParticipantIndex>) -> Self {
        let mut seen = vec![false; targets.len()];
        for target in &targets {
            assert!(
                target.get() < targets.len() && !seen[target.get()],
                "called `Assignment::new` with a target vector that is not a permutation: \
                 recipient {} is out of bounds or assigned twice",
                target.get()
            );
            seen[target.get()] = true;
        }
        Self { targets }
    }

    /// Constructs the empty assignment (for an empty roster).
    #[inline]
    pub fn empty() -> Self {
        Self { targets: Vec::new() }
    }

    /// Returns the number of giver/recipient pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the assignment covers no participants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the recipient assigned to `giver`.
    ///
    /// # Panics
    ///
    /// Panics if `giver` is out of bounds.
    #[inline]
    pub fn recipient_of(&self, giver: ParticipantIndex) -> ParticipantIndex {
        debug_assert!(
            giver.get() < self.targets.len(),
            "called `Assignment::recipient_of` with giver index out of bounds: the len is {} but the index is {}",
            self.targets.len(),
            giver.get()
        );

        self.targets[giver.get()]
    }

    /// Returns the giver-indexed target vector.
    #[inline]
    pub fn targets(&self) -> &[ParticipantIndex] {
        &self.targets
    }

    /// Returns an iterator over `(giver, recipient)` index pairs in roster
    /// order.
    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (ParticipantIndex, ParticipantIndex)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .map(|(giver, recipient)| (ParticipantIndex::new(giver), *recipient))
    }

    /// Returns an iterator over `(giver, recipient)` name pairs resolved
    /// against `roster`.
    ///
    /// # Panics
    ///
    /// Panics if the assignment was produced for a different roster size.
    pub fn named_pairs<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = (&'a str, &'a str)> {
        assert_eq!(
            self.targets.len(),
            roster.len(),
            "called `Assignment::named_pairs` with a roster of mismatched size: assignment covers {} participants, roster has {}",
            self.targets.len(),
            roster.len()
        );

        self.pairs()
            .map(move |(giver, recipient)| (roster.name(giver), roster.name(recipient)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ParticipantEntry;

    fn pi(index: usize) -> ParticipantIndex {
        ParticipantIndex::new(index)
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let assignment = Assignment::new(vec![pi(1), pi(2), pi(0)]);

        assert_eq!(assignment.len(), 3);
        assert!(!assignment.is_empty());
        assert_eq!(assignment.recipient_of(pi(0)), pi(1));
        assert_eq!(assignment.recipient_of(pi(1)), pi(2));
        assert_eq!(assignment.recipient_of(pi(2)), pi(0));
        assert_eq!(assignment.targets(), &[pi(1), pi(2), pi(0)]);
    }

    #[test]
    fn test_pairs_iterate_in_giver_order() {
        let assignment = Assignment::new(vec![pi(1), pi(0)]);
        let pairs: Vec<_> = assignment.pairs().collect();
        assert_eq!(pairs, vec![(pi(0), pi(1)), (pi(1), pi(0))]);
    }

    #[test]
    fn test_named_pairs() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::named("Pat"),
            ParticipantEntry::named("Lee"),
        ])
        .unwrap();
        let assignment = Assignment::new(vec![pi(1), pi(0)]);

        let pairs: Vec<_> = assignment.named_pairs(&roster).collect();
        assert_eq!(pairs, vec![("Pat", "Lee"), ("Lee", "Pat")]);
    }

    #[test]
    fn test_empty_assignment_is_valid() {
        let assignment = Assignment::empty();
        assert!(assignment.is_empty());
        assert_eq!(assignment.pairs().count(), 0);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn test_new_panics_on_repeated_recipient() {
        let _ = Assignment::new(vec![pi(0), pi(0)]);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn test_new_panics_on_out_of_bounds_recipient() {
        let _ = Assignment::new(vec![pi(2), pi(0)]);
    }
}
