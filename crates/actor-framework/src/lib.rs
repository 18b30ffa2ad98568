//! # Actor Framework
//!
//! Building blocks for keeping a stateful, ordered collection of entities behind a single
//! Tokio task. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of the
//! **Actor Model**: every resource type gets the same CRUD surface, and all access to its
//! state goes through messages.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Uniform API**: Create, Get, Update, Delete and List look the same for every resource.
//! - **Isolated state**: the actor owns the collection; callers never hold a lock.
//! - **Sequential processing**: requests are applied one at a time in arrival order, so a
//!   read always observes every write that was acknowledged before it.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain model, its DTOs and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, ordering, commits
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//! 4. **Storage Layer** ([`Persistence`]) - hydration at start, a snapshot after every commit
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, MemoryPersistence, Placement, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//!     pinned: bool,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] enum NoteAction { TogglePin }
//! #[derive(Debug)] struct PinnedOnly(bool);
//! #[derive(Debug)] struct NoteError;
//!
//! impl std::fmt::Display for NoteError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
//! }
//! impl std::error::Error for NoteError {}
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = bool;
//!     type Query = PinnedOnly;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text, pinned: false })
//!     }
//!
//!     fn matches(&self, query: &PinnedOnly) -> bool { !query.0 || self.pinned }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<bool, Self::Error> {
//!         match action {
//!             NoteAction::TogglePin => {
//!                 self.pinned = !self.pinned;
//!                 Ok(self.pinned)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = std::sync::atomic::AtomicU32::new(1);
//!     let storage = MemoryPersistence::new();
//!     let (actor, client) = ResourceActor::<Note>::new(10, move || {
//!         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
//!     });
//!     tokio::spawn(actor.with_placement(Placement::Front).with_persistence(storage.clone()).run(()));
//!
//!     let first = client.create(NoteCreate { text: "first".into() }).await.unwrap();
//!     let second = client.create(NoteCreate { text: "second".into() }).await.unwrap();
//!     assert_eq!(client.perform_action(first, NoteAction::TogglePin).await.unwrap(), Some(true));
//!
//!     // Newest first.
//!     let all = client.list(PinnedOnly(false)).await.unwrap();
//!     assert_eq!(all.iter().map(|n| n.id).collect::<Vec<_>>(), vec![second, first]);
//!
//!     let pinned = client.list(PinnedOnly(true)).await.unwrap();
//!     assert_eq!(pinned.len(), 1);
//!
//!     // Three commits, three snapshots.
//!     assert_eq!(storage.save_count(), 3);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at construction
//! time, so an actor can be handed the clients of actors created after it. Entities that
//! need nothing use `()`.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - A conditional [`ResourceClient::replace`] lets a caller do slow work outside the actor
//!   and still refuse to overwrite anything that committed in the meantime
//!
//! ## Testing
//!
//! [`MemoryPersistence`] makes every write observable. The [`mock`] module scripts the
//! actor's side of the channel so that client logic can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod persistence;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{Placement, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Generation, ReplaceOutcome, ResourceRequest, Response, StoreStats};
pub use persistence::{MemoryPersistence, NoPersistence, Persistence};
