//! # Composer
//!
//! App-shell coordination: wires the document store, the composition session,
//! the editor surface, and the save latency into one facade. UI clients call
//! these methods and read back plain data; nothing here writes to a terminal
//! or assumes a rendering toolkit.

use crate::editor::DocumentEditor;
use crate::error::Result;
use crate::message_store::{MessageStore, SaveOutcome};
use crate::preview::{self, DeviceContext, Preview};
use crate::session::{CompositionSession, SaveLatency, SessionState};
use crate::store::StorageBackend;
use crate::summary::{self, MessageSummary};
use chrono::Utc;

pub struct Composer<B: StorageBackend, E: DocumentEditor, L: SaveLatency> {
    store: MessageStore<B>,
    session: CompositionSession,
    editor: E,
    latency: L,
}

impl<B: StorageBackend, E: DocumentEditor, L: SaveLatency> Composer<B, E, L> {
    /// Hydrate the store and, when a persisted active message survives,
    /// load it straight back into the editor.
    pub fn new(backend: B, editor: E, latency: L) -> Self {
        let store = MessageStore::open(backend);
        let mut composer = Self {
            store,
            session: CompositionSession::new(),
            editor,
            latency,
        };
        composer.restore_active();
        composer
    }

    fn restore_active(&mut self) {
        if let Some(message) = self.store.state().active_message().cloned() {
            if let Some(content) = self.session.activate(&message) {
                self.editor.replace_content(&content);
            }
        }
    }

    pub fn store(&self) -> &MessageStore<B> {
        &self.store
    }

    pub fn session(&self) -> &CompositionSession {
        &self.session
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Entry point for the editor surface's change notification.
    pub fn edit(&mut self, content: &str) {
        self.session.content_changed(content, &mut self.store);
    }

    /// A message was picked from the saved list. Ids that no longer resolve
    /// (evicted between render and click) are a silent no-op.
    pub fn select_message(&mut self, message_id: &str) {
        let Some(message) = self
            .store
            .state()
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .cloned()
        else {
            return;
        };
        self.store.load(&message.id);
        if let Some(content) = self.session.activate(&message) {
            self.editor.replace_content(&content);
        }
    }

    /// Run the save flow; on a fresh composition the editor is blanked for
    /// the next message.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let outcome = self.session.save(&mut self.store, &self.latency)?;
        if self.session.state() == SessionState::Empty {
            self.editor.clear();
        }
        Ok(outcome)
    }

    /// Explicit "start new message".
    pub fn start_new(&mut self) {
        self.session.start_new(&mut self.store);
        self.editor.clear();
    }

    /// Live previews for every device frame, fed by the in-progress content
    /// and falling back to the active message when the session is blank.
    pub fn previews(&self) -> Vec<(DeviceContext, Preview)> {
        let content = if self.session.content().is_empty() {
            self.store
                .state()
                .active_message()
                .map(|m| m.content.as_str())
                .unwrap_or("")
        } else {
            self.session.content()
        };
        DeviceContext::ALL
            .iter()
            .map(|&context| (context, preview::render(content, context)))
            .collect()
    }

    /// Sidebar projections of the saved list, newest first.
    pub fn summaries(&self) -> Vec<MessageSummary> {
        summary::summarize(
            &self.store.state().messages,
            self.store.state().active_message_id.as_deref(),
            Utc::now(),
        )
    }
}
