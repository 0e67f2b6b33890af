//! # Document Store
//!
//! Owns the durable list of saved messages, the active-message identity, and
//! the transient saving flag.
//!
//! The design splits along two lines, so the cap/eviction/reordering rules can
//! be unit tested without any storage:
//!
//! - [`MessageState`] holds the data and exposes **pure transition functions**
//!   (`apply_*`) that mutate in-memory state only.
//! - [`MessageStore`] wraps a state plus a [`StorageBackend`] and re-persists
//!   the durable fields after each transition.
//!
//! Persistence is best-effort by policy: a storage fault logs a warning and
//! the in-memory change commits anyway. A local storage problem must never
//! block composing or saving within the current session. For the same reason,
//! hydration treats unreadable or malformed data as "no data".

use crate::error::Result;
use crate::model::Message;
use crate::store::{StorageBackend, ACTIVE_MESSAGE_ID_KEY, SAVED_MESSAGES_KEY};
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Hard cap on retained messages; saving past it evicts from the tail.
pub const MAX_SAVED_MESSAGES: usize = 3;

/// What a save commit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

impl SaveOutcome {
    pub fn message_id(&self) -> &str {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, SaveOutcome::Created(_))
    }
}

/// The document store's state. `messages` and `active_message_id` are the
/// durable subset; `is_saving` is transient and always false after hydration.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    /// Saved messages, newest first, never more than [`MAX_SAVED_MESSAGES`].
    pub messages: Vec<Message>,
    pub active_message_id: Option<String>,
    pub is_saving: bool,
}

impl MessageState {
    /// The save transition. Resolving new-vs-update and applying the mutation
    /// happen in this one non-interruptible step; any save latency must run
    /// before it, never inside it.
    ///
    /// With a known `message_id` the message is rewritten in place, given a
    /// fresh timestamp, and moved to the front. Otherwise a new message is
    /// created, prepended, and the list truncated to the cap. Either way the
    /// written message becomes the active one.
    pub fn apply_save(
        &mut self,
        content: String,
        message_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> SaveOutcome {
        if let Some(id) = message_id {
            if let Some(pos) = self.messages.iter().position(|m| m.id == id) {
                let mut message = self.messages.remove(pos);
                message.content = content;
                message.timestamp = now;
                self.messages.insert(0, message);
                self.active_message_id = Some(id.to_string());
                return SaveOutcome::Updated(id.to_string());
            }
            // The id was most likely evicted between load and save; the save
            // degrades to a create rather than failing.
            warn!("save targeted unknown message {id}; creating a new message instead");
        }

        let message = Message::new(content, now);
        let id = message.id.clone();
        self.messages.insert(0, message);
        self.messages.truncate(MAX_SAVED_MESSAGES);
        self.active_message_id = Some(id.clone());
        SaveOutcome::Created(id)
    }

    /// Select the active message. The id is not validated against `messages`;
    /// callers resolve it from the current list themselves.
    pub fn apply_load(&mut self, message_id: &str) {
        self.active_message_id = Some(message_id.to_string());
    }

    /// Live mirror: content only. No timestamp refresh, no reordering.
    /// Unknown ids are a silent no-op (the message may have been evicted).
    pub fn apply_update_content(&mut self, message_id: &str, content: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) {
            message.content = content.to_string();
        }
    }

    pub fn apply_clear_active(&mut self) {
        self.active_message_id = None;
    }

    /// The active message, when the active id still resolves to a saved one.
    pub fn active_message(&self) -> Option<&Message> {
        let id = self.active_message_id.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }
}

/// Document store bound to a storage backend.
pub struct MessageStore<B: StorageBackend> {
    state: MessageState,
    backend: B,
}

impl<B: StorageBackend> MessageStore<B> {
    /// Hydrate from the backend. Faults and malformed data degrade to an
    /// empty store; opening never fails on storage problems.
    pub fn open(backend: B) -> Self {
        let messages = match backend.read(SAVED_MESSAGES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(messages) => messages,
                Err(err) => {
                    warn!("ignoring malformed saved messages: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to load saved messages: {err}");
                Vec::new()
            }
        };
        let active_message_id = match backend.read(ACTIVE_MESSAGE_ID_KEY) {
            Ok(id) => id,
            Err(err) => {
                warn!("failed to load active message id: {err}");
                None
            }
        };
        debug!(
            "hydrated {} saved message(s), active id {:?}",
            messages.len(),
            active_message_id
        );
        Self {
            state: MessageState {
                messages,
                active_message_id,
                is_saving: false,
            },
            backend,
        }
    }

    pub fn state(&self) -> &MessageState {
        &self.state
    }

    pub fn is_saving(&self) -> bool {
        self.state.is_saving
    }

    /// Transient saving indicator. Never persisted, never fails.
    pub fn set_saving(&mut self, saving: bool) {
        self.state.is_saving = saving;
    }

    /// Create-or-update write path. Commits in memory, then re-persists both
    /// durable keys in full. The store does not validate `content`; the
    /// empty-save guard belongs to the caller.
    pub fn save(&mut self, content: String, message_id: Option<&str>) -> SaveOutcome {
        let outcome = self.state.apply_save(content, message_id, Utc::now());
        self.persist_messages();
        self.persist_active_id();
        outcome
    }

    /// Select the active message and persist the selection. Does not touch
    /// the message list.
    pub fn load(&mut self, message_id: &str) {
        self.state.apply_load(message_id);
        self.persist_active_id();
    }

    /// Live-preview mirror; in-memory only until the next save.
    pub fn update_content(&mut self, message_id: &str, content: &str) {
        self.state.apply_update_content(message_id, content);
    }

    /// Deselect the active message. Absence of the persisted key is the
    /// durable representation of "no active message". Idempotent.
    pub fn clear_active(&mut self) {
        self.state.apply_clear_active();
        if let Err(err) = self.backend.remove(ACTIVE_MESSAGE_ID_KEY) {
            warn!("failed to clear persisted active message id: {err}");
        }
    }

    fn persist_messages(&self) {
        let payload = match serde_json::to_string(&self.state.messages) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize saved messages: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.write(SAVED_MESSAGES_KEY, &payload) {
            warn!("failed to persist saved messages: {err}");
        }
    }

    fn persist_active_id(&self) {
        let result: Result<()> = match self.state.active_message_id.as_deref() {
            Some(id) => self.backend.write(ACTIVE_MESSAGE_ID_KEY, id),
            None => self.backend.remove(ACTIVE_MESSAGE_ID_KEY),
        };
        if let Err(err) = result {
            warn!("failed to persist active message id: {err}");
        }
    }
}
