//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type implements to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the DTOs used to create and update
//! the resource, the custom actions it supports, the query shape used to select a view of the
//! collection, and the error type its hooks can return.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them only when the entity needs to validate or react
//! to its own lifecycle.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// The associated types keep every message type-safe: a `Product` actor only accepts a
/// `Product::Create` payload, only answers `Product::Query` selections, and so on.
///
/// # Identity
/// Entities carry their own id ([`ActorEntity::id`]). The actor keys its store by that id,
/// which is what keeps ids unique when a whole collection is swapped in with
/// [`ResourceClient::replace`](crate::ResourceClient::replace).
///
/// # Async & Context
/// Hooks are `async` so an entity can call other actors while handling a message. The
/// `Context` type is injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// A partial update applied to an existing instance.
    type Update: Send + Sync + Debug + 'static;

    /// Enum representing resource-specific operations (e.g. `ToggleLike`).
    type Action: Send + Sync + Debug + 'static;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug + 'static;

    /// Selection criteria for [`ResourceClient::list`](crate::ResourceClient::list).
    type Query: Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// The error type for this entity's hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the view selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request targets this entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
