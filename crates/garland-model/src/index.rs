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

//! A strongly typed, zero-cost participant index.
//!
//! Rosters, assignments, and the solver all address participants by
//! position. Wrapping the position in a dedicated type keeps giver and
//! recipient positions from being confused with unrelated `usize` values,
//! while `#[repr(transparent)]` guarantees no runtime overhead.

/// A typed index identifying a participant by roster position.
///
/// # Examples
///
/// ```rust
/// use garland_model::index::ParticipantIndex;
///
/// let p = ParticipantIndex::new(3);
/// assert_eq!(p.get(), 3);
/// assert_eq!(format!("{}", p), "ParticipantIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantIndex(usize);

impl ParticipantIndex {
    /// Creates a new `ParticipantIndex` for the given roster position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for ParticipantIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParticipantIndex({})", self.0)
    }
}

impl std::fmt::Display for ParticipantIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParticipantIndex({})", self.0)
    }
}

impl From<usize> for ParticipantIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<ParticipantIndex> for usize {
    fn from(index: ParticipantIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let idx = ParticipantIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions() {
        // From usize
        let idx: ParticipantIndex = 42.into();
        assert_eq!(idx.get(), 42);

        // Into usize
        let val: usize = idx.into();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let idx = ParticipantIndex::new(7);
        assert_eq!(format!("{}", idx), "ParticipantIndex(7)");
        assert_eq!(format!("{:?}", idx), "ParticipantIndex(7)");
    }

    #[test]
    fn test_ordering() {
        assert!(ParticipantIndex::new(1) < ParticipantIndex::new(2));
        assert_eq!(ParticipantIndex::new(5), ParticipantIndex::new(5));
    }
}
