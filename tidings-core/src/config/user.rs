//! Cached user profile access.
//!
//! The engine does not resolve user identity itself; a sign-in flow
//! elsewhere writes a small JSON document with the already-resolved user
//! id, and this module reads it back once at session start.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, CoreError};

/// The locally cached user profile.
///
/// Only the fields the engine needs are deserialized; anything else in
/// the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Opaque identifier of the signed-in user.
    pub id: String,
}

impl UserProfile {
    /// Reads the cached profile document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when the document is missing
    /// (no user has signed in on this device yet),
    /// [`ConfigError::ProfileParseError`] for malformed JSON, and
    /// [`ConfigError::ValidationError`] when the id field is empty.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CoreError::Config(ConfigError::NotFound {
                    locations: vec![path.to_path_buf()],
                }))
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }))
            }
        };

        let profile: UserProfile = serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(ConfigError::ProfileParseError(e)))?;

        if profile.id.trim().is_empty() {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "cached user profile has an empty id".to_string(),
            )));
        }

        Ok(profile)
    }
}
