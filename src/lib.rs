//! # Draftpad Architecture
//!
//! Draftpad is a **UI-agnostic message composition library**: the persistence
//! and active-document state machine behind a rich-text message composer with
//! live device previews. The editing surface and the visual device frames are
//! external collaborators; this crate owns the rules, not the pixels.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (not in this crate)                              │
//! │  - Rich-text surface implementing editor::DocumentEditor   │
//! │  - Device frames drawing preview::Preview values            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Composer facade (composer.rs)                              │
//! │  - select / edit / save / start-new / previews / summaries  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  Composition Session     │   │  Document Store              │
//! │  (session.rs)            │──▶│  (message_store.rs)          │
//! │  - Empty/Editing/Saving  │   │  - cap 3, newest first       │
//! │  - empty-save guard      │   │  - active id, saving flag    │
//! │  - busy-flag save flow   │   │  - pure transitions + persist│
//! └──────────────────────────┘   └──────────────────────────────┘
//!                                               │
//!                                               ▼
//!                                ┌──────────────────────────────┐
//!                                │  Storage Layer (store/)      │
//!                                │  - StorageBackend trait      │
//!                                │  - FsBackend / MemBackend    │
//!                                └──────────────────────────────┘
//! ```
//!
//! ## Key policies
//!
//! - **Persistence is best-effort.** Storage faults log and degrade to
//!   in-memory state; they never fail the user's action or block startup.
//! - **Three messages, newest first.** Saving a fourth evicts the tail;
//!   updating an existing message moves it to the front.
//! - **One save at a time.** A busy flag rejects overlapping saves; there is
//!   no queue and no cancellation.
//! - **Live mirror ≠ save.** `update_content` feeds previews of in-progress
//!   edits without touching timestamps, ordering, or the medium.
//!
//! ## Module Overview
//!
//! - [`composer`]: the facade UI clients talk to
//! - [`session`]: transient editor-side state machine and save latency
//! - [`message_store`]: durable state, cap/eviction/reordering rules
//! - [`store`]: key-value storage abstraction and backends
//! - [`model`]: the `Message` entity and content helpers
//! - [`preview`]: device-context render projections
//! - [`summary`]: saved-list sidebar projections
//! - [`editor`]: the external editor-surface contract
//! - [`config`]: data-directory resolution and save-delay tuning
//! - [`error`]: error types

pub mod composer;
pub mod config;
pub mod editor;
pub mod error;
pub mod message_store;
pub mod model;
pub mod preview;
pub mod session;
pub mod store;
pub mod summary;
