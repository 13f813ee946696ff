//! File-backed session storage
//!
//! Holds the auth token, display name, last chosen stance, and preferred
//! language for the signed-in user, plus a stable per-installation client
//! id. Writes go through to disk immediately; there is no schema
//! versioning.

use std::fs;
use std::path::PathBuf;

use agora_core::Stance;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;

/// Persisted session fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Bearer token for authenticated calls
    pub auth_token: Option<String>,
    /// Display name of the signed-in user
    pub user_name: Option<String>,
    /// Last stance the user picked in the onboarding flow
    pub stance: Option<Stance>,
    /// Preferred UI language tag (e.g. "ko", "en")
    pub preferred_language: Option<String>,
    /// Stable per-installation id, generated on first open
    pub client_id: String,
}

impl SessionData {
    fn fresh() -> Self {
        Self {
            auth_token: None,
            user_name: None,
            stance: None,
            preferred_language: None,
            client_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Session store with write-through file persistence
pub struct SessionStore {
    path: Option<PathBuf>,
    data: RwLock<SessionData>,
}

impl SessionStore {
    /// Open the session file at `path`, creating it (and its parent
    /// directory) with a fresh client id when absent or unreadable
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SessionData>(&raw) {
                Ok(data) => data,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Session file unreadable, starting fresh");
                    SessionData::fresh()
                }
            },
            Err(_) => SessionData::fresh(),
        };

        let store = Self {
            path: Some(path),
            data: RwLock::new(data),
        };
        store.persist(&store.data.read())?;
        Ok(store)
    }

    /// Create a store that never touches disk (tests, ephemeral sessions)
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(SessionData::fresh()),
        }
    }

    /// The stable per-installation client id
    #[must_use]
    pub fn client_id(&self) -> String {
        self.data.read().client_id.clone()
    }

    /// Get the stored auth token
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.data.read().auth_token.clone()
    }

    /// Store or clear the auth token
    pub fn set_auth_token(&self, token: Option<String>) -> AppResult<()> {
        let mut data = self.data.write();
        data.auth_token = token;
        tracing::debug!(present = data.auth_token.is_some(), "Stored auth token");
        self.persist(&data)
    }

    /// Get the stored user name
    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.data.read().user_name.clone()
    }

    /// Store the user name
    pub fn set_user_name(&self, name: impl Into<String>) -> AppResult<()> {
        let mut data = self.data.write();
        data.user_name = Some(name.into());
        self.persist(&data)
    }

    /// Get the stored stance
    #[must_use]
    pub fn stance(&self) -> Option<Stance> {
        self.data.read().stance
    }

    /// Store or clear the stance
    pub fn set_stance(&self, stance: Option<Stance>) -> AppResult<()> {
        let mut data = self.data.write();
        data.stance = stance;
        self.persist(&data)
    }

    /// Get the preferred language tag
    #[must_use]
    pub fn preferred_language(&self) -> Option<String> {
        self.data.read().preferred_language.clone()
    }

    /// Store the preferred language tag
    pub fn set_preferred_language(&self, language: impl Into<String>) -> AppResult<()> {
        let mut data = self.data.write();
        data.preferred_language = Some(language.into());
        self.persist(&data)
    }

    /// Clear everything except the client id (sign-out)
    pub fn clear(&self) -> AppResult<()> {
        let mut data = self.data.write();
        let client_id = data.client_id.clone();
        *data = SessionData::fresh();
        data.client_id = client_id;
        tracing::debug!("Cleared session");
        self.persist(&data)
    }

    fn persist(&self, data: &SessionData) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file, then rename over the target so a
        // crash mid-write never leaves a torn session file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("client_id", &self.data.read().client_id)
            .finish()
    }
}
