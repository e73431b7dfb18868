use chrono::{DateTime, Duration, Utc};
use log::info;
use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::store::FeedbackStore;

/// Everything one dashboard session accumulates.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
    store: FeedbackStore,
}

impl Session {
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            last_active: now,
            store: FeedbackStore::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FeedbackStore {
        &mut self.store
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_active = now;
    }

    pub fn is_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> bool {
        now - self.last_active > max_idle
    }
}

/// Sessions keyed by whatever scopes them (a channel, a user).
///
/// The mutex is the single writer lock for every store it holds; callers
/// must not await while inside [`SessionRegistry::with_session`].
pub struct SessionRegistry<K> {
    sessions: Mutex<HashMap<K, Session>>,
}

impl<K> Default for SessionRegistry<K> {
    fn default() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> SessionRegistry<K>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the session for `key`, starting one if needed.
    pub async fn with_session<R>(&self, key: &K, f: impl FnOnce(&mut Session) -> R) -> R {
        self.with_session_at(key, Utc::now(), f).await
    }

    pub async fn with_session_at<R>(
        &self,
        key: &K,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut Session) -> R,
    ) -> R {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(key.clone()).or_insert_with(|| {
            let session = Session::start(now);
            info!("Started session {} for {:?}", session.id(), key);
            session
        });
        session.touch(now);
        f(session)
    }

    /// Replaces the session for `key` with a fresh, empty one.
    pub async fn reset(&self, key: &K) -> Uuid {
        let session = Session::start(Utc::now());
        let id = session.id();
        let previous = self.sessions.lock().await.insert(key.clone(), session);
        match previous {
            Some(old) => info!(
                "Reset session for {:?}: {} ({} records) -> {}",
                key,
                old.id(),
                old.store().len(),
                id
            ),
            None => info!("Started session {} for {:?}", id, key),
        }
        id
    }

    /// Ends sessions idle for longer than `max_idle`, returning what was ended.
    pub async fn end_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> Vec<(K, Session)> {
        let mut sessions = self.sessions.lock().await;
        let idle: Vec<K> = sessions
            .iter()
            .filter(|(_, session)| session.is_idle(now, max_idle))
            .map(|(key, _)| key.clone())
            .collect();

        idle.into_iter()
            .filter_map(|key| sessions.remove(&key).map(|session| (key, session)))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
