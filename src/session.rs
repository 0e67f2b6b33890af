//! # Composition Session
//!
//! The transient, never-persisted side of the editor: the content string
//! currently being composed and which saved message (if any) it was loaded
//! from. The session mediates between the editor surface and the document
//! store; neither leaks into the other's concerns.
//!
//! State machine: `Empty → Editing` on the first keystroke or a load,
//! `Editing → Saving` on an accepted save request, then back to `Empty` when
//! the save created a fresh message or to `Editing` when it updated the loaded
//! one. There is no terminal state.

use crate::error::{DraftpadError, Result};
use crate::message_store::{MessageStore, SaveOutcome};
use crate::model::{self, Message};
use crate::store::StorageBackend;
use std::thread;
use std::time::Duration;

/// Stand-in for the round trip a real save backend would make. Injected so
/// tests resolve immediately and a real network call can slot in later
/// without changing the state machine.
pub trait SaveLatency {
    fn wait(&self);
}

/// Production latency: a fixed pause before the commit.
pub struct FixedDelay(pub Duration);

impl SaveLatency for FixedDelay {
    fn wait(&self) {
        thread::sleep(self.0);
    }
}

/// Immediate resolution, for tests.
pub struct NoDelay;

impl SaveLatency for NoDelay {
    fn wait(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Editing,
    Saving,
}

#[derive(Debug)]
pub struct CompositionSession {
    content: String,
    /// Last content pushed into the editor surface. Suppresses the redundant
    /// re-initialization loop when the editor's change notification echoes
    /// the same content back.
    loaded_content: Option<String>,
    state: SessionState,
}

impl Default for CompositionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionSession {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            loaded_content: None,
            state: SessionState::Empty,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// A saved message was selected for editing. Returns the content the
    /// editor surface must now display, or `None` when the surface already
    /// holds it and must not be re-initialized.
    pub fn activate(&mut self, message: &Message) -> Option<String> {
        self.content = message.content.clone();
        self.state = SessionState::Editing;
        if self.loaded_content.as_deref() == Some(message.content.as_str()) {
            return None;
        }
        self.loaded_content = Some(message.content.clone());
        Some(message.content.clone())
    }

    /// Editor change notification. Updates the displayed content and, when a
    /// message is active, mirrors the edit into the store's live-edit buffer
    /// so observers see it without a save.
    pub fn content_changed<B: StorageBackend>(
        &mut self,
        content: &str,
        store: &mut MessageStore<B>,
    ) {
        self.content = content.to_string();
        if self.state == SessionState::Empty && !model::is_blank(content) {
            self.state = SessionState::Editing;
        }
        if let Some(id) = store.state().active_message_id.clone() {
            store.update_content(&id, content);
        }
    }

    /// The save flow. Refuses empty content and overlapping saves before
    /// touching the store; the busy flag is the only re-entrancy guard, a
    /// second request while one is in flight is rejected, not queued. The
    /// injected latency runs before the commit, so new-vs-update resolution
    /// and the mutation stay one uninterrupted step. No cancellation: once
    /// past the guards the save always commits.
    pub fn save<B: StorageBackend, L: SaveLatency>(
        &mut self,
        store: &mut MessageStore<B>,
        latency: &L,
    ) -> Result<SaveOutcome> {
        if store.is_saving() {
            return Err(DraftpadError::SaveInProgress);
        }
        if model::is_blank(&self.content) {
            return Err(DraftpadError::EmptyContent);
        }

        self.state = SessionState::Saving;
        store.set_saving(true);
        latency.wait();

        let message_id = store.state().active_message_id.clone();
        let outcome = store.save(self.content.clone(), message_id.as_deref());
        store.set_saving(false);

        // A fresh composition leaves a blank editor behind; an update keeps
        // the just-saved content loaded and editable.
        if message_id.is_none() {
            self.content.clear();
            self.loaded_content = None;
            self.state = SessionState::Empty;
        } else {
            self.state = SessionState::Editing;
        }
        Ok(outcome)
    }

    /// Explicit "start new message": deselect in the store and blank the
    /// session, regardless of what was loaded.
    pub fn start_new<B: StorageBackend>(&mut self, store: &mut MessageStore<B>) {
        store.clear_active();
        self.content.clear();
        self.loaded_content = None;
        self.state = SessionState::Empty;
    }
}
