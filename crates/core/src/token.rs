//! Bearer-token lookup across the two credential storage scopes.

use std::sync::Mutex;

/// Where a token was stored by the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    /// Lives for the current session only.
    Session,
    /// Survives restarts ("remember me").
    Persistent,
}

/// Read-only view of the current credential.
///
/// The network layer never inspects storage directly; it only asks this
/// capability for the effective token.
pub trait TokenProvider: Send + Sync {
    /// The bearer token to attach, session scope taking precedence.
    /// `None` when the user is not authenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// In-memory token store with the two scopes the login flow writes to.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<String>>,
    persistent: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token under the given scope. Empty strings count as absent.
    pub fn set(&self, scope: TokenScope, token: impl Into<String>) {
        let token = token.into();
        let value = if token.is_empty() { None } else { Some(token) };
        match scope {
            TokenScope::Session => *self.session.lock().unwrap_or_else(|e| e.into_inner()) = value,
            TokenScope::Persistent => {
                *self.persistent.lock().unwrap_or_else(|e| e.into_inner()) = value
            }
        }
    }

    /// Drop the token from both scopes (logout).
    pub fn clear(&self) {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = None;
        *self.persistent.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl TokenProvider for MemoryTokenStore {
    fn bearer_token(&self) -> Option<String> {
        let session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        if session.is_some() {
            return session.clone();
        }
        drop(session);
        self.persistent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
