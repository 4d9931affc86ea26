//! Persisted session store.
//!
//! Mirrors the original client's two local-storage keys: the user id and an
//! opaque token. There is no format contract beyond "both non-empty means
//! logged in" - no expiry, no refresh, no encryption.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::store::{read_json, write_json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SESSION_FILE: &str = "session.json";

/// The locally held session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Logged-in user's id
    #[serde(default)]
    pub user_id: Option<String>,
    /// Opaque session token
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    /// A session counts as logged in when both keys are present and non-empty.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        has(&self.user_id) && has(&self.token)
    }
}

/// Handle to the on-disk session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted in the configured data directory.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            path: config.data_dir.join(SESSION_FILE),
        }
    }

    /// Creates a store at an explicit file path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the session; a missing file is a logged-out session.
    pub fn load(&self) -> Result<Session> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Stores the given user id and token.
    pub fn login(&self, user_id: String, token: String) -> Result<Session> {
        let session = Session {
            user_id: Some(user_id),
            token: Some(token),
        };
        write_json(&self.path, &session)?;
        Ok(session)
    }

    /// Clears both session keys.
    pub fn logout(&self) -> Result<()> {
        write_json(&self.path, &Session::default())
    }

    /// The logged-in user's id, if any.
    pub fn user_id(&self) -> Result<Option<String>> {
        let session = self.load()?;
        if session.is_logged_in() {
            Ok(session.user_id)
        } else {
            Ok(None)
        }
    }
}
