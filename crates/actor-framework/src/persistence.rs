//! # Persistence
//!
//! The actor never writes to storage on its own initiative. It calls a [`Persistence`]
//! backend at two well-defined points:
//!
//! 1. **Hydration**: [`Persistence::load`] once, before the first message is processed.
//! 2. **Commit**: [`Persistence::save`] with the full collection after every committed
//!    mutation, before the caller gets its response.
//!
//! Keeping the backend behind a trait makes the write side effect observable in tests
//! (see [`MemoryPersistence`]) and swappable in production.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Durable storage for a whole collection of entities.
#[async_trait]
pub trait Persistence<T: ActorEntity>: Send + Sync {
    /// Reads the last saved collection. A missing snapshot is an empty collection.
    async fn load(&self) -> Result<Vec<T>, FrameworkError>;

    /// Overwrites the snapshot with `items`, in store order.
    async fn save(&self, items: &[T]) -> Result<(), FrameworkError>;
}

/// Backend that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

#[async_trait]
impl<T: ActorEntity> Persistence<T> for NoPersistence {
    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        Ok(Vec::new())
    }

    async fn save(&self, _items: &[T]) -> Result<(), FrameworkError> {
        Ok(())
    }
}

/// In-memory snapshot shared between clones.
///
/// Cloning the backend before handing it to an actor lets a test seed the snapshot,
/// inspect what was written, and count how many writes happened.
#[derive(Debug)]
pub struct MemoryPersistence<T> {
    snapshot: Arc<Mutex<Vec<T>>>,
    saves: Arc<AtomicUsize>,
}

impl<T> Clone for MemoryPersistence<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            saves: Arc::clone(&self.saves),
        }
    }
}

impl<T: Clone> Default for MemoryPersistence<T> {
    fn default() -> Self {
        Self::seeded(Vec::new())
    }
}

impl<T: Clone> MemoryPersistence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose first `load` returns `items`.
    pub fn seeded(items: Vec<T>) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(items)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The last saved (or seeded) collection.
    pub async fn snapshot(&self) -> Vec<T> {
        self.snapshot.lock().await.clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: ActorEntity> Persistence<T> for MemoryPersistence<T> {
    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, items: &[T]) -> Result<(), FrameworkError> {
        *self.snapshot.lock().await = items.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
