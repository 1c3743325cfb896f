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

//! Raw participant entries as they appear in input files.
//!
//! An input file is a JSON array whose items take one of two forms: a bare
//! name string, or a record with a required `name` and an optional
//! `exclusions` list. Shape checks live here, deliberately outside of any
//! serde derive, so that malformed input surfaces as a [`ValidationError`]
//! rather than a generic deserialization failure.

use crate::error::ValidationError;
use serde_json::Value;

/// A single raw entry from a participant list, prior to normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantEntry {
    /// A bare name: a participant with no exclusions.
    Name(String),
    /// A record carrying a name and the names this participant must not be
    /// assigned to.
    Record {
        name: String,
        exclusions: Vec<String>,
    },
}

impl ParticipantEntry {
    /// Creates a bare-name entry.
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a record entry with the given exclusion names.
    pub fn with_exclusions<I, S>(name: impl Into<String>, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Record {
            name: name.into(),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the participant name of this entry.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Record { name, .. } => name,
        }
    }

    /// Returns the exclusion names of this entry (empty for bare names).
    #[inline]
    pub fn exclusions(&self) -> &[String] {
        match self {
            Self::Name(_) => &[],
            Self::Record { exclusions, .. } => exclusions,
        }
    }

    /// Validates the shape of one JSON value and converts it into an entry.
    ///
    /// Accepted shapes:
    /// - a JSON string (bare name);
    /// - a JSON object with a string `name` field and, optionally, an
    ///   `exclusions` field holding a list of strings (`null` counts as
    ///   absent).
    ///
    /// Anything else fails with a [`ValidationError`].
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(name) => Ok(Self::Name(name.clone())),
            Value::Object(fields) => {
                let name = match fields.get("name") {
                    Some(Value::String(name)) => name.clone(),
                    _ => return Err(ValidationError::InvalidEntry),
                };
                let exclusions = match fields.get("exclusions") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => {
                        let mut exclusions = Vec::with_capacity(items.len());
                        for item in items {
                            match item {
                                Value::String(excluded) => exclusions.push(excluded.clone()),
                                _ => return Err(ValidationError::InvalidExclusions(name)),
                            }
                        }
                        exclusions
                    }
                    Some(_) => return Err(ValidationError::InvalidExclusions(name)),
                };
                Ok(Self::Record { name, exclusions })
            }
            _ => Err(ValidationError::InvalidEntry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_name() {
        let entry = ParticipantEntry::from_json(&json!("Pat")).unwrap();
        assert_eq!(entry, ParticipantEntry::named("Pat"));
        assert_eq!(entry.name(), "Pat");
        assert!(entry.exclusions().is_empty());
    }

    #[test]
    fn test_record_with_exclusions() {
        let entry =
            ParticipantEntry::from_json(&json!({"name": "Jordan", "exclusions": ["Taylor"]}))
                .unwrap();
        assert_eq!(entry.name(), "Jordan");
        assert_eq!(entry.exclusions(), ["Taylor".to_string()]);
    }

    #[test]
    fn test_record_without_exclusions() {
        let entry = ParticipantEntry::from_json(&json!({"name": "Morgan"})).unwrap();
        assert_eq!(entry, ParticipantEntry::with_exclusions("Morgan", Vec::<String>::new()));

        // An explicit null counts as absent.
        let entry = ParticipantEntry::from_json(&json!({"name": "Morgan", "exclusions": null}))
            .unwrap();
        assert!(entry.exclusions().is_empty());
    }

    #[test]
    fn test_rejects_non_entry_shapes() {
        assert_eq!(
            ParticipantEntry::from_json(&json!(42)),
            Err(ValidationError::InvalidEntry)
        );
        assert_eq!(
            ParticipantEntry::from_json(&json!(["Pat"])),
            Err(ValidationError::InvalidEntry)
        );
        assert_eq!(
            ParticipantEntry::from_json(&json!(null)),
            Err(ValidationError::InvalidEntry)
        );
    }

    #[test]
    fn test_rejects_missing_or_non_string_name() {
        assert_eq!(
            ParticipantEntry::from_json(&json!({"exclusions": []})),
            Err(ValidationError::InvalidEntry)
        );
        assert_eq!(
            ParticipantEntry::from_json(&json!({"name": 7})),
            Err(ValidationError::InvalidEntry)
        );
    }

    #[test]
    fn test_rejects_malformed_exclusions() {
        assert_eq!(
            ParticipantEntry::from_json(&json!({"name": "Pat", "exclusions": "Lee"})),
            Err(ValidationError::InvalidExclusions("Pat".into()))
        );
        assert_eq!(
            ParticipantEntry::from_json(&json!({"name": "Pat", "exclusions": ["Lee", 3]})),
            Err(ValidationError::InvalidExclusions("Pat".into()))
        );
    }
}
