use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use time::{Duration, OffsetDateTime};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{error::ApiError, session::Session};

struct Entry {
    session: Session,
    last_seen: OffsetDateTime,
}

/// Process-local, non-persistent map of isolated sessions.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Entry>>,
    idle_ttl: Option<Duration>,
}

impl SessionStore {
    /// `idle_ttl = None` keeps sessions until the process exits.
    pub fn new(idle_ttl: Option<Duration>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    // Poisoning is ignored: session values are plain data.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, entry: &Entry, now: OffsetDateTime) -> bool {
        self.idle_ttl
            .map(|ttl| now - entry.last_seen > ttl)
            .unwrap_or(false)
    }

    /// Starts a fresh session on the welcome screen.
    pub fn open(&self, now: OffsetDateTime) -> Uuid {
        let purged = self.purge_idle(now);
        if purged > 0 {
            info!(purged, "idle sessions dropped");
        }

        let id = Uuid::new_v4();
        let mut sessions = self.lock();
        sessions.insert(
            id,
            Entry {
                session: Session::default(),
                last_seen: now,
            },
        );
        info!(session_id = %id, open = sessions.len(), "session opened");
        id
    }

    /// Runs `f` against the session with exclusive access.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        now: OffsetDateTime,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, ApiError> {
        let mut sessions = self.lock();
        let expired = match sessions.get(&id) {
            Some(entry) => self.is_expired(entry, now),
            None => return Err(ApiError::SessionNotFound),
        };
        if expired {
            sessions.remove(&id);
            debug!(session_id = %id, "session expired");
            return Err(ApiError::SessionNotFound);
        }

        let entry = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
        entry.last_seen = now;
        Ok(f(&mut entry.session))
    }

    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            info!(session_id = %id, "session closed");
        }
        removed
    }

    /// Drops sessions idle longer than the TTL; returns how many went.
    pub fn purge_idle(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        before - sessions.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
