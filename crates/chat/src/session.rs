//! Session conversation log
//!
//! In-memory, per-session history of chat turns. Entries live for the
//! lifetime of the process; a session is created lazily on first append and
//! removed wholesale by `clear`. There is no size cap or expiry — unbounded
//! growth is an accepted limitation of the current design.
//!
//! Backed by a concurrent map so appends to different sessions never
//! contend on a single global lock, while appends to the same session
//! serialize on its shard entry and cannot lose turns.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use sahayak_core::ClassificationRecord;

/// One completed chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// What the user sent.
    pub user: String,
    /// What the assistant replied.
    pub assistant: String,
    /// Classification metadata for the turn.
    pub metadata: ClassificationRecord,
    /// When the turn completed.
    pub timestamp: DateTime<Utc>,
}

/// Concurrent per-session conversation history.
#[derive(Debug, Default)]
pub struct SessionLog {
    sessions: DashMap<String, Vec<Turn>>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn to a session, creating the session lazily.
    pub fn append(
        &self,
        session_id: &str,
        user: impl Into<String>,
        assistant: impl Into<String>,
        metadata: ClassificationRecord,
    ) {
        let turn = Turn {
            user: user.into(),
            assistant: assistant.into(),
            metadata,
            timestamp: Utc::now(),
        };
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(turn);
    }

    /// Turns for a session in chronological order; empty for unknown ids.
    pub fn get(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .get(session_id)
            .map(|turns| turns.clone())
            .unwrap_or_default()
    }

    /// Remove a session entirely. No-op for unknown ids.
    pub fn clear(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }
}
