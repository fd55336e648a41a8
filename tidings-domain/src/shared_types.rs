//! Shared identifier types for the Tidings domain layer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Opaque identifier of the user owning a timeline and its notifications.
///
/// Resolved elsewhere (the cached profile document); the engine never
/// inspects its contents.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new `UserId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided id is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "UserId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the user id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserId").field(&self.0).finish()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<tidings_core::config::UserProfile> for UserId {
    fn from(profile: tidings_core::config::UserProfile) -> Self {
        Self::new(profile.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_round_trips_through_serde() {
        let id = UserId::new("user-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user-42\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(UserId::new("u1").to_string(), "u1");
    }

    #[test]
    fn user_id_from_cached_profile() {
        let profile = tidings_core::config::UserProfile {
            id: "user-7".to_string(),
        };
        assert_eq!(UserId::from(profile), UserId::new("user-7"));
    }
}
