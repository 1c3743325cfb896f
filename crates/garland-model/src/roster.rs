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

//! # The Canonical Roster
//!
//! `Roster` is the validated, immutable participant model every other crate
//! consumes. Construction performs the full normalization pass:
//!
//! - names are kept in input order and checked for duplicates;
//! - exclusion names are resolved to [`ParticipantIndex`] values;
//! - exclusion names that do not match any participant are dropped silently.
//!
//! Normalization is a pure transform and idempotent: rebuilding a roster from
//! its own entries yields an identical roster.

use crate::{entry::ParticipantEntry, error::ValidationError, index::ParticipantIndex};
use rustc_hash::FxHashMap;
use serde_json::Value;
use smallvec::SmallVec;

/// Resolved exclusion indices for one participant, kept sorted.
///
/// Exclusion sets are tiny in practice (a spouse, last year's recipient), so
/// an inline vector beats a heap-allocated set.
type ExclusionSet = SmallVec<[ParticipantIndex; 4]>;

/// The canonical participant model: input-ordered names plus one resolved
/// exclusion set per participant.
///
/// # Examples
///
/// ```rust
/// use garland_model::{entry::ParticipantEntry, roster::Roster};
///
/// let roster = Roster::from_entries(&[
///     ParticipantEntry::with_exclusions("Jordan", ["Taylor"]),
///     ParticipantEntry::named("Taylor"),
/// ])
/// .unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.name(roster.index_of("Jordan").unwrap()), "Jordan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,                            // len = num participants
    exclusions: Vec<ExclusionSet>,                 // len = num participants
    lookup: FxHashMap<String, ParticipantIndex>,   // name -> position
}

impl Roster {
    /// Normalizes a sequence of raw entries into a roster.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateName`] if two entries share a
    /// name. Shape errors are caught earlier, by
    /// [`ParticipantEntry::from_json`].
    pub fn from_entries(entries: &[ParticipantEntry]) -> Result<Self, ValidationError> {
        let mut names = Vec::with_capacity(entries.len());
        let mut lookup = FxHashMap::default();

        for (position, entry) in entries.iter().enumerate() {
            let name = entry.name().to_owned();
            if lookup
                .insert(name.clone(), ParticipantIndex::new(position))
                .is_some()
            {
                return Err(ValidationError::DuplicateName(name));
            }
            names.push(name);
        }

        // Second pass: exclusions resolve against the complete name set, so
        // forward references ("A" excluding "Z") work regardless of order.
        let mut exclusions = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut resolved: ExclusionSet = entry
                .exclusions()
                .iter()
                .filter_map(|excluded| lookup.get(excluded.as_str()).copied())
                .collect();
            resolved.sort_unstable();
            resolved.dedup();
            exclusions.push(resolved);
        }

        Ok(Self {
            names,
            exclusions,
            lookup,
        })
    }

    /// Validates a slice of raw JSON values and normalizes them into a
    /// roster. This is the path input files take.
    pub fn from_json_values(values: &[Value]) -> Result<Self, ValidationError> {
        let entries = values
            .iter()
            .map(ParticipantEntry::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(&entries)
    }

    /// Returns the number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the roster has no participants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns all participant names in input order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn name(&self, index: ParticipantIndex) -> &str {
        &self.names[index.get()]
    }

    /// Returns the index of `name`, if that participant exists.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<ParticipantIndex> {
        self.lookup.get(name).copied()
    }

    /// Returns an iterator over all participant indices in roster order.
    #[inline]
    pub fn indices(&self) -> impl Iterator<Item = ParticipantIndex> {
        (0..self.names.len()).map(ParticipantIndex::new)
    }

    /// Returns `true` if `giver` must not be assigned to `recipient`.
    ///
    /// # Panics
    ///
    /// Panics if `giver` is out of bounds.
    #[inline]
    pub fn excludes(&self, giver: ParticipantIndex, recipient: ParticipantIndex) -> bool {
        self.exclusions[giver.get()].binary_search(&recipient).is_ok()
    }

    /// Returns the resolved, sorted exclusion indices of one participant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn exclusions_of(&self, index: ParticipantIndex) -> &[ParticipantIndex] {
        &self.exclusions[index.get()]
    }

    /// Reconstructs the canonical raw entries for this roster.
    ///
    /// Feeding the result back through [`Roster::from_entries`] yields an
    /// identical roster.
    pub fn entries(&self) -> Vec<ParticipantEntry> {
        self.indices()
            .map(|index| {
                let exclusions = self.exclusions_of(index);
                if exclusions.is_empty() {
                    ParticipantEntry::named(self.name(index))
                } else {
                    ParticipantEntry::with_exclusions(
                        self.name(index),
                        exclusions.iter().map(|excluded| self.name(*excluded)),
                    )
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pi(index: usize) -> ParticipantIndex {
        ParticipantIndex::new(index)
    }

    #[test]
    fn test_names_keep_input_order() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::named("Pat"),
            ParticipantEntry::named("Lee"),
            ParticipantEntry::named("Sam"),
        ])
        .unwrap();

        assert_eq!(roster.names(), ["Pat", "Lee", "Sam"]);
        assert_eq!(roster.index_of("Sam"), Some(pi(2)));
        assert_eq!(roster.index_of("Ghost"), None);
    }

    #[test]
    fn test_exclusions_are_resolved_to_indices() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::with_exclusions("Jordan", ["Taylor"]),
            ParticipantEntry::with_exclusions("Taylor", ["Jordan"]),
            ParticipantEntry::named("Morgan"),
        ])
        .unwrap();

        assert!(roster.excludes(pi(0), pi(1)));
        assert!(roster.excludes(pi(1), pi(0)));
        assert!(!roster.excludes(pi(0), pi(2)));
        assert_eq!(roster.exclusions_of(pi(2)), &[]);
    }

    #[test]
    fn test_unknown_exclusions_are_dropped() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::with_exclusions("A", ["Ghost"]),
            ParticipantEntry::with_exclusions("B", Vec::<String>::new()),
        ])
        .unwrap();

        assert_eq!(roster.exclusions_of(pi(0)), &[]);
        assert_eq!(roster.exclusions_of(pi(1)), &[]);
    }

    #[test]
    fn test_forward_references_resolve() {
        // "A" excludes someone defined later in the list.
        let roster = Roster::from_entries(&[
            ParticipantEntry::with_exclusions("A", ["Z"]),
            ParticipantEntry::named("Z"),
        ])
        .unwrap();

        assert!(roster.excludes(pi(0), pi(1)));
    }

    #[test]
    fn test_duplicate_names_fail() {
        let err = Roster::from_entries(&[
            ParticipantEntry::named("Pat"),
            ParticipantEntry::with_exclusions("Pat", ["Lee"]),
        ])
        .unwrap_err();

        assert_eq!(err, ValidationError::DuplicateName("Pat".into()));
    }

    #[test]
    fn test_duplicate_exclusions_are_deduplicated() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::with_exclusions("A", ["B", "B"]),
            ParticipantEntry::named("B"),
        ])
        .unwrap();

        assert_eq!(roster.exclusions_of(pi(0)), &[pi(1)]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let roster = Roster::from_entries(&[
            ParticipantEntry::with_exclusions("Jordan", ["Taylor", "Ghost"]),
            ParticipantEntry::named("Taylor"),
            ParticipantEntry::named("Morgan"),
        ])
        .unwrap();

        let renormalized = Roster::from_entries(&roster.entries()).unwrap();
        assert_eq!(roster, renormalized);
    }

    #[test]
    fn test_from_json_values() {
        let values = vec![
            json!({"name": "Jordan", "exclusions": ["Taylor"]}),
            json!("Taylor"),
        ];
        let roster = Roster::from_json_values(&values).unwrap();
        assert_eq!(roster.names(), ["Jordan", "Taylor"]);
        assert!(roster.excludes(pi(0), pi(1)));
    }

    #[test]
    fn test_from_json_values_propagates_shape_errors() {
        let err = Roster::from_json_values(&[json!(7)]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEntry);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::from_entries(&[]).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(roster.entries().is_empty());
    }
}
