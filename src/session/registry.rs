//! Session registry: one engine per client session.
//!
//! The map of sessions sits behind an `RwLock` and is only write-locked to
//! add or drop sessions. Each engine has its own `Mutex`, so calls for
//! different sessions run in parallel and calls for one session are
//! serialized.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cards::Card;
use crate::core::RegistryConfig;
use crate::error::{GameError, Result};
use crate::game::{GameEngine, GameSnapshot};

/// Opaque session identifier (UUID v4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

struct Session {
    engine: Mutex<GameEngine>,
    last_used: Mutex<Instant>,
}

impl Session {
    fn is_expired(&self, now: Instant, config: &RegistryConfig) -> bool {
        now.saturating_duration_since(*self.last_used.lock()) >= config.session_ttl
    }
}

/// In-memory map from session id to game.
pub struct SessionRegistry {
    config: RegistryConfig,
    sessions: RwLock<FxHashMap<SessionId, Arc<Session>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Start a new game in a fresh session.
    ///
    /// Expired sessions are dropped first; fails when `max_sessions` are
    /// still live or the game config is invalid.
    pub fn start_game(&self) -> Result<(SessionId, GameSnapshot)> {
        self.purge_expired();

        let engine = GameEngine::try_new(self.config.game.clone())?;
        let snapshot = engine.snapshot();
        let id = SessionId::new_v4();

        let mut sessions = self.sessions.write();
        if sessions.len() >= self.config.max_sessions {
            return Err(GameError::TooManySessions(self.config.max_sessions));
        }
        sessions.insert(
            id,
            Arc::new(Session {
                engine: Mutex::new(engine),
                last_used: Mutex::new(Instant::now()),
            }),
        );

        info!(session = %id, live = sessions.len(), "session started");
        Ok((id, snapshot))
    }

    /// Player move plus the AI's reply.
    pub fn player_play(&self, id: SessionId, cards: &[Card]) -> Result<GameSnapshot> {
        self.with_engine(id, |engine| engine.player_play(cards))
    }

    /// Let the AI act if it is its turn.
    pub fn pass_turn(&self, id: SessionId) -> Result<GameSnapshot> {
        self.with_engine(id, GameEngine::pass_turn)
    }

    /// Current view without changing anything.
    pub fn snapshot(&self, id: SessionId) -> Result<GameSnapshot> {
        self.with_engine(id, |engine| Ok(engine.snapshot()))
    }

    /// Run `f` against a session's engine under its lock and mark the
    /// session as used.
    pub fn with_engine<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameEngine) -> Result<T>,
    ) -> Result<T> {
        let now = Instant::now();
        let session = self
            .sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(GameError::SessionNotFound(id))?;

        if session.is_expired(now, &self.config) {
            self.sessions.write().remove(&id);
            info!(session = %id, "session expired");
            return Err(GameError::SessionNotFound(id));
        }

        *session.last_used.lock() = now;
        let mut engine = session.engine.lock();
        debug!(session = %id, "session call");
        f(&mut *engine)
    }

    /// Drop a session. Returns whether it existed.
    pub fn end_session(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            info!(session = %id, "session ended");
        }
        removed
    }

    /// Drop every session idle for longer than the TTL. Returns how many.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, &self.config));

        let purged = before - sessions.len();
        if purged > 0 {
            info!(purged, live = sessions.len(), "expired sessions purged");
        }
        purged
    }

    /// Live (not yet purged) sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
