//! Authenticated caller identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the authenticated caller
///
/// Supplied by the authentication layer and keyed into the profile store.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    /// Wrap a uid, rejecting blank values
    pub fn new(uid: impl Into<String>) -> Option<Self> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            None
        } else {
            Some(Self(uid))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CallerIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
