//! Server-side admin sessions and the cookie that carries them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "club_session";

/// Claims tracked for one browser client.
#[derive(Debug, Clone)]
pub struct Session {
    /// Set once the admin login check has passed.
    pub authenticated: bool,
}

/// Externally-owned session persistence.
///
/// The admin workflow depends only on this interface, never on a global.
/// `set` must complete before any post-login redirect is issued, otherwise
/// the immediately following request can observe an unauthenticated session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a live session by id, refreshing its idle deadline.
    async fn get(&self, id: &str) -> Option<Session>;

    /// Persist a session under the given id.
    async fn set(&self, id: &str, session: Session);

    /// Invalidate a session immediately. A stale cookie presented after this
    /// call no longer resolves to a session.
    async fn destroy(&self, id: &str);
}

/// In-process store with a fixed idle expiration.
pub struct MemorySessionStore {
    idle: Duration,
    entries: RwLock<HashMap<String, (Session, Instant)>>,
}

impl MemorySessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(id) {
            Some((session, deadline)) if *deadline > Instant::now() => {
                // Sliding idle expiry: activity extends the session.
                *deadline = Instant::now() + self.idle;
                Some(session.clone())
            }
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    async fn set(&self, id: &str, session: Session) {
        let deadline = Instant::now() + self.idle;
        self.entries
            .write()
            .await
            .insert(id.to_string(), (session, deadline));
    }

    async fn destroy(&self, id: &str) {
        self.entries.write().await.remove(id);
    }
}

/// Generate a fresh, unguessable session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build the `Set-Cookie` value carrying a session id.
pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session id from a request's `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}
