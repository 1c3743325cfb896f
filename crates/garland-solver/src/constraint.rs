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

//! The pairing predicate shared by both solver phases.
//!
//! The randomized phase is a pure performance optimization over the exact
//! phase; that guarantee only holds while both phases check candidate pairs
//! through this one type.

use garland_model::{index::ParticipantIndex, roster::Roster};

/// An immutable view of the pairing constraints for one solve.
///
/// Combines the roster's exclusion sets with the self-assignment rule.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSet<'a> {
    roster: &'a Roster,
    ban_self: bool,
}

impl<'a> ConstraintSet<'a> {
    /// Creates the constraint set for `roster`.
    #[inline]
    pub fn new(roster: &'a Roster, ban_self: bool) -> Self {
        Self { roster, ban_self }
    }

    /// Returns the number of participants.
    #[inline]
    pub fn num_participants(&self) -> usize {
        self.roster.len()
    }

    /// Returns `true` if self-assignment is forbidden.
    #[inline]
    pub fn bans_self(&self) -> bool {
        self.ban_self
    }

    /// Returns `true` if assigning `recipient` to `giver` violates no
    /// constraint.
    #[inline]
    pub fn permits(&self, giver: ParticipantIndex, recipient: ParticipantIndex) -> bool {
        if self.ban_self && giver == recipient {
            return false;
        }
        !self.roster.excludes(giver, recipient)
    }

    /// Returns an iterator over every recipient `giver` may be assigned, in
    /// roster order.
    #[inline]
    pub fn allowed_recipients(
        &self,
        giver: ParticipantIndex,
    ) -> impl Iterator<Item = ParticipantIndex> + '_ {
        self.roster
            .indices()
            .filter(move |recipient| self.permits(giver, *recipient))
    }
}
