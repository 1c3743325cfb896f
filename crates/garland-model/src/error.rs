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

//! Validation errors raised while normalizing participant input.

/// The error type for participant normalization.
///
/// All variants describe malformed or contradictory input shape. A roster is
/// only ever constructed from input that passed every one of these checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An entry is neither a name string nor a record with a string `name`.
    InvalidEntry,
    /// Two entries carry the same name (case-sensitive, exact match).
    DuplicateName(String),
    /// An `exclusions` field is present but is not a list of name strings.
    InvalidExclusions(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntry => write!(
                f,
                "invalid participant entry: expected a name or a record with a string 'name' field"
            ),
            Self::DuplicateName(name) => {
                write!(f, "duplicate participant name: '{}'", name)
            }
            Self::InvalidExclusions(name) => write!(
                f,
                "'exclusions' for participant '{}' must be a list of names",
                name
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", ValidationError::DuplicateName("Pat".into())),
            "duplicate participant name: 'Pat'"
        );
        assert_eq!(
            format!("{}", ValidationError::InvalidExclusions("Lee".into())),
            "'exclusions' for participant 'Lee' must be a list of names"
        );
        assert!(format!("{}", ValidationError::InvalidEntry).contains("invalid participant entry"));
    }
}
