use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::{task::JoinHandle, time::Instant};
use uuid::Uuid;

use super::MemorySession;
use crate::config::defaults;

#[derive(Debug, Clone)]
struct StoredSession {
    session: MemorySession,
    last_seen: Instant,
}

/// Server-side session storage keyed by the id carried in the session cookie.
///
/// Each request checks out a copy of its session, works on it exclusively
/// and writes it back when done. Empty sessions are never stored, and
/// sessions idle for longer than the timeout are dropped.
#[derive(Debug, Clone)]
pub struct DashMapSessionStore {
    sessions: Arc<DashMap<Uuid, StoredSession>>,
    idle_timeout: Duration,
}

impl Default for DashMapSessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::from_secs(defaults::SESSION_IDLE_TIMEOUT_SECS))
    }
}

impl DashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            idle_timeout,
        }
    }

    /// Load the session for `id`, or start a fresh one under a new id when the
    /// id is missing, unknown or expired.
    pub fn load(&self, id: Option<Uuid>) -> (Uuid, MemorySession) {
        if let Some(id) = id {
            let live = self
                .sessions
                .get(&id)
                .filter(|entry| !self.is_expired(entry))
                .map(|entry| entry.session.clone());

            match live {
                Some(session) => return (id, session),
                None => {
                    self.sessions.remove_if(&id, |_, entry| self.is_expired(entry));
                }
            }
        }
        (Uuid::new_v4(), MemorySession::new())
    }

    /// Store the session and refresh its idle timer. An empty session is
    /// discarded instead; returns whether the session was kept.
    pub fn save(&self, id: Uuid, session: MemorySession) -> bool {
        if session.is_empty() {
            self.sessions.remove(&id);
            return false;
        }

        self.sessions.insert(
            id,
            StoredSession {
                session,
                last_seen: Instant::now(),
            },
        );
        true
    }

    pub fn remove(&self, id: &Uuid) -> Option<MemorySession> {
        self.sessions.remove(id).map(|(_, entry)| entry.session)
    }

    /// Drop every session idle for longer than the timeout. Returns how many
    /// were dropped.
    pub fn sweep_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !self.is_expired(entry));
        before.saturating_sub(self.sessions.len())
    }

    /// Sweep expired sessions every `every` on the current runtime.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let removed = store.sweep_expired();
                if removed > 0 {
                    tracing::debug!(removed, "Expired sessions swept");
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_expired(&self, entry: &StoredSession) -> bool {
        entry.last_seen.elapsed() >= self.idle_timeout
    }
}
