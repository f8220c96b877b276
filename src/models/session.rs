// ABOUTME: Session identity correlating this client with the document state held by the backend
// A single token lives at a time; a new upload always replaces the previous one

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Opaque identifier sent alongside every backend request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owns the live session token for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionHolder {
    current: Option<SessionToken>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token, replacing whatever was live before.
    pub fn create(&mut self) -> SessionToken {
        let token = SessionToken::generate();
        if let Some(previous) = self.current.replace(token.clone()) {
            debug!("Replacing session {} with {}", previous, token);
        }
        info!("Created session {}", token);
        token
    }

    pub fn current(&self) -> Option<&SessionToken> {
        self.current.as_ref()
    }

    pub fn is_current(&self, token: &SessionToken) -> bool {
        self.current.as_ref() == Some(token)
    }

    pub fn clear(&mut self) -> Option<SessionToken> {
        let cleared = self.current.take();
        if let Some(ref token) = cleared {
            info!("Cleared session {}", token);
        }
        cleared
    }
}
