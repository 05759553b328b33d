//! Session handling.
//!
//! The current user is an explicit value: login and registration return a
//! `Session`, and views that need identity take it as a parameter. A small
//! JSON file under the platform data directory stands in for browser
//! session storage.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{User, UserRole};

/// The logged-in identity, threaded through calls that need it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: UserRole,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            role: user.role,
            started_at: crate::models::now(),
        }
    }
}

/// Persists the session between runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform data directory, falling back to the
    /// working directory when none is known.
    pub fn with_default_path() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("tender").join("session.json"))
    }

    /// Load the saved session, if any.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&raw)?;
        debug!(user_id = %session.user_id, "Loaded session");
        Ok(Some(session))
    }

    /// Save the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        debug!(user_id = %session.user_id, path = %self.path.display(), "Saved session");
        Ok(())
    }

    /// Remove the saved session. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "Cleared session");
        }
        Ok(())
    }
}
