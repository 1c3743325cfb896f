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

//! Participant list loader for the gift-exchange domain.
//!
//! This module resolves a participants file from one of several sources and
//! parses it into the raw JSON entries consumed by the normalizer. A source
//! is searched for in a fixed order: an explicit path passed by the caller,
//! a path named by an environment variable, a project-local
//! `resources/participants.json`, and finally the committed
//! `resources/participants.json.example`. Participant data is deliberately
//! not embedded in code; a run without any configured source fails with a
//! distinct not-found error so callers can tell "nothing to load" apart from
//! "loaded something malformed".
//!
//! Parsing stops at the JSON layer. Files must hold a top-level array, but
//! the shape of each item is checked later by the normalizer, keeping the
//! validation error taxonomy in one place. The loader accepts a path, any
//! reader, or a string slice, which keeps tests and tooling away from the
//! filesystem when they do not need it.

use serde_json::Value;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

/// The default environment variable consulted for a participants file path.
pub const PARTICIPANTS_ENV_VAR: &str = "GARLAND_PARTICIPANTS";

/// The error type for the participant loading process.
#[derive(Debug)]
pub enum LoadError {
    /// No participants source could be resolved, or an explicit path does
    /// not exist. The string describes what was searched.
    NotFound(String),
    /// An I/O error occurred while reading a resolved source.
    Io(std::io::Error),
    /// The source is not valid JSON.
    Json(serde_json::Error),
    /// The source parsed, but its top level is not an array of entries.
    NotAnArray,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(detail) => write!(f, "{}", detail),
            Self::Io(e) => write!(f, "I/O error while reading participants: {e}"),
            Self::Json(e) => write!(f, "participants file is not valid JSON: {e}"),
            Self::NotAnArray => {
                write!(f, "participants file must hold a top-level JSON array of entries")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// A configurable resolver and reader for participant files.
///
/// # Resolution order
///
/// 1. The explicit path passed to [`ParticipantSource::load`], if any. A
///    missing explicit path is an error rather than a fallthrough, so typos
///    do not silently pick up a different file.
/// 2. The path named by the configured environment variable, if that file
///    exists.
/// 3. `<resource_dir>/participants.json` (local override, ignored by git).
/// 4. `<resource_dir>/participants.json.example` (committed example).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSource {
    env_var: String,
    resource_dir: PathBuf,
}

impl Default for ParticipantSource {
    fn default() -> Self {
        Self {
            env_var: PARTICIPANTS_ENV_VAR.to_owned(),
            resource_dir: PathBuf::from("resources"),
        }
    }
}

impl ParticipantSource {
    /// Creates a source with the default environment variable and
    /// `resources/` directory.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the environment variable consulted during resolution.
    #[inline]
    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.env_var = var.into();
        self
    }

    /// Overrides the resource directory searched during resolution.
    #[inline]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Resolves the participants file to read, without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if an explicit path does not exist or
    /// if no source is configured at all.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf, LoadError> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
            return Err(LoadError::NotFound(format!(
                "participants file not found: {}",
                path.display()
            )));
        }

        if let Ok(env_path) = std::env::var(&self.env_var) {
            let candidate = PathBuf::from(env_path);
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        let local = self.resource_dir.join("participants.json");
        if local.exists() {
            return Ok(local);
        }

        let example = self.resource_dir.join("participants.json.example");
        if example.exists() {
            return Ok(example);
        }

        Err(LoadError::NotFound(format!(
            "no participants configuration found; pass a path, set {}, or add {}",
            self.env_var,
            self.resource_dir.join("participants.json").display()
        )))
    }

    /// Resolves and reads a participants file into raw JSON entries.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Vec<Value>, LoadError> {
        let path = self.resolve(explicit)?;
        Self::from_path(&path)
    }

    /// Reads raw JSON entries from a specific file.
    pub fn from_path(path: &Path) -> Result<Vec<Value>, LoadError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Reads raw JSON entries from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Value>, LoadError> {
        let parsed: Value = serde_json::from_reader(reader)?;
        match parsed {
            Value::Array(entries) => Ok(entries),
            _ => Err(LoadError::NotAnArray),
        }
    }

    /// Reads raw JSON entries from an in-memory string.
    pub fn from_json_str(data: &str) -> Result<Vec<Value>, LoadError> {
        Self::from_reader(data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = write_file(dir.path(), "people.json", r#"["Pat", "Lee"]"#);
        // A resource file also exists but must not be picked up.
        write_file(dir.path(), "participants.json", r#"["Ignored"]"#);

        let source = ParticipantSource::new().with_resource_dir(dir.path());
        let entries = source.load(Some(explicit.as_path())).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], serde_json::json!("Pat"));
    }

    #[test]
    fn test_missing_explicit_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = ParticipantSource::new().with_resource_dir(dir.path());

        let err = source
            .resolve(Some(Path::new("/definitely/not/here.json")))
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_env_var_is_consulted() {
        let dir = tempfile::tempdir().unwrap();
        let target = write_file(dir.path(), "from-env.json", r#"["Sam"]"#);

        // A test-local variable name keeps this independent of the process
        // environment and of other tests.
        let var = "GARLAND_PARTICIPANTS_TEST_ENV_VAR";
        std::env::set_var(var, &target);
        let source = ParticipantSource::new()
            .with_env_var(var)
            .with_resource_dir(dir.path().join("missing"));
        let resolved = source.resolve(None).unwrap();
        std::env::remove_var(var);

        assert_eq!(resolved, target);
    }

    #[test]
    fn test_local_resource_beats_example() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_file(dir.path(), "participants.json", r#"["Local"]"#);
        write_file(dir.path(), "participants.json.example", r#"["Example"]"#);

        let source = ParticipantSource::new()
            .with_env_var("GARLAND_PARTICIPANTS_TEST_UNSET")
            .with_resource_dir(dir.path());
        assert_eq!(source.resolve(None).unwrap(), local);
    }

    #[test]
    fn test_example_is_the_last_resort() {
        let dir = tempfile::tempdir().unwrap();
        let example = write_file(dir.path(), "participants.json.example", r#"["Example"]"#);

        let source = ParticipantSource::new()
            .with_env_var("GARLAND_PARTICIPANTS_TEST_UNSET")
            .with_resource_dir(dir.path());
        assert_eq!(source.resolve(None).unwrap(), example);
    }

    #[test]
    fn test_nothing_configured_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = ParticipantSource::new()
            .with_env_var("GARLAND_PARTICIPANTS_TEST_UNSET")
            .with_resource_dir(dir.path().join("missing"));

        let err = source.load(None).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_top_level_must_be_an_array() {
        let err = ParticipantSource::from_json_str(r#"{"name": "Pat"}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray));

        let err = ParticipantSource::from_json_str("not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
