//! Session persistence.
//!
//! The identity provider is an external collaborator: the core only
//! needs an opaque token and a display name, and treats the token's
//! mere presence as access to the protected views. Nothing here
//! re-verifies validity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::paths::StarscanPaths;

/// A stored session: opaque token plus display identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Opaque session token.
    pub token: String,
    /// Display name shown in the UI and attached to log records.
    pub name: String,
    /// Contact address, informational only.
    pub email: String,
}

impl StoredSession {
    /// Mints a fresh session for `name`/`email`.
    pub fn issue(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Load/save/delete operations over the session file.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    paths: StarscanPaths,
}

impl SessionAuth {
    /// Opens session storage at the detected platform location.
    pub fn new() -> Result<Self> {
        let paths = StarscanPaths::new()?;
        paths.ensure_dirs()?;
        Ok(Self { paths })
    }

    /// Opens session storage rooted at an explicit directory.
    pub fn with_paths(paths: StarscanPaths) -> Result<Self> {
        paths.ensure_dirs()?;
        Ok(Self { paths })
    }

    /// The stored session, if one exists.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        let path = self.paths.session_file();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Persists the session.
    pub fn save(&self, session: &StoredSession) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(self.paths.session_file(), json)?;
        Ok(())
    }

    /// Removes the stored session. Returns whether one existed.
    pub fn delete(&self) -> Result<bool> {
        match std::fs::remove_file(self.paths.session_file()) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn auth() -> (SessionAuth, TempDir) {
        let dir = TempDir::new().unwrap();
        let auth = SessionAuth::with_paths(StarscanPaths::with_root(dir.path())).unwrap();
        (auth, dir)
    }

    #[test]
    fn save_load_delete_round_trip() {
        let (auth, _dir) = auth();
        assert_eq!(auth.load().unwrap(), None);

        let session = StoredSession::issue("Commander", "cmdr@fleet.example");
        auth.save(&session).unwrap();
        assert_eq!(auth.load().unwrap(), Some(session));

        assert!(auth.delete().unwrap());
        assert!(!auth.delete().unwrap());
        assert_eq!(auth.load().unwrap(), None);
    }

    #[test]
    fn issued_tokens_are_unique() {
        let a = StoredSession::issue("A", "a@example.com");
        let b = StoredSession::issue("B", "b@example.com");
        assert_ne!(a.token, b.token);
    }
}
