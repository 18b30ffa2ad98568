//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Counter bumped by the actor on every committed mutation.
///
/// A client that reads the generation, does slow work, and then asks for a write
/// conditioned on that generation can tell whether anything happened in between.
pub type Generation = u64;

/// Snapshot of the store's size and generation, read atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub len: usize,
    pub generation: Generation,
}

/// Outcome of a conditional [`ResourceRequest::Replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The collection was swapped; `len` entities are now stored.
    Applied { len: usize },
    /// Another mutation committed first; the store was left untouched.
    Stale { current: Generation },
}

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// - **Create**: builds a new entity from [`ActorEntity::Create`] under a fresh id.
/// - **Get**: fetches one entity by id.
/// - **Update**: applies [`ActorEntity::Update`]; answers `None` when the id is unknown.
/// - **Delete**: removes an entity; answers `false` when the id is unknown.
/// - **Action**: runs a custom [`ActorEntity::Action`]; answers `None` when the id is unknown.
///
/// # Collection Operations
/// - **List**: every entity matching an [`ActorEntity::Query`], in store order.
/// - **Stats**: current length and [`Generation`].
/// - **Replace**: swaps the whole collection, but only if the generation still equals
///   `expected_generation`.
///
/// Unknown ids are not errors: the caller learns about them from the `Option`/`bool`
/// in the response.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<T::ActionResult>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Stats {
        respond_to: Response<StoreStats>,
    },
    Replace {
        items: Vec<T>,
        expected_generation: Generation,
        respond_to: Response<ReplaceOutcome>,
    },
}
