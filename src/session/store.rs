use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::service::users::User;

/// State attached to one logged-in client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token carried in the session cookie
    pub id: String,

    /// The account that logged in
    pub user: User,

    /// When the session was created; drives TTL expiry
    pub issued_at: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>, user: User) -> Self {
        Self {
            id: id.into(),
            user,
            issued_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.issued_at.elapsed() >= ttl
    }
}

/// Shared map from session id to session.
///
/// Cloning is cheap and every clone sees the same sessions. Sessions older
/// than the TTL are treated as absent, and the store never holds more than
/// `capacity` entries.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
    capacity: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// A fresh random 128-bit session id, hex encoded.
    pub fn generate_id() -> String {
        format!("{:032x}", rand::random::<u128>())
    }

    /// Inserts a session, replacing any session with the same id.
    ///
    /// When full, expired sessions are dropped first and then the oldest one.
    pub async fn add(&self, session: Session) {
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&session.id) && sessions.len() >= self.capacity {
            let ttl = self.ttl;
            sessions.retain(|_, s| !s.is_expired(ttl));

            if sessions.len() >= self.capacity {
                let oldest = sessions
                    .values()
                    .min_by_key(|s| s.issued_at)
                    .map(|s| s.id.clone());

                if let Some(id) = oldest {
                    sessions.remove(&id);
                    tracing::debug!(session = %id, "Evicted oldest session at capacity");
                }
            }
        }

        sessions.insert(session.id.clone(), session);
    }

    /// Looks up a live session. Unknown and expired ids both give `None`.
    pub async fn find_session(&self, id: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                None => return None,
                Some(session) if !session.is_expired(self.ttl) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions.get(id).is_some_and(|s| s.is_expired(self.ttl)) {
            sessions.remove(id);
            tracing::debug!(session = %id, "Dropped expired session");
        }
        None
    }

    pub async fn remove(&self, id: &str) -> Option<Session> {
        self.sessions.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
