//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns an ordered collection of
//! entities and processes every request against it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Generation, ReplaceOutcome, ResourceRequest, StoreStats};
use crate::persistence::{NoPersistence, Persistence};
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Where newly created entities land in the store's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Newest first.
    Front,
    /// Oldest first.
    #[default]
    Back,
}

/// The generic actor that manages an ordered collection of entities.
///
/// # Concurrency Model
/// The actor owns its store and drains its channel one message at a time, so each request
/// sees the effects of every request before it and none after it. No `Mutex` guards the
/// store.
///
/// # Ordering
/// The store is an insertion-ordered map. [`Placement`] decides whether creates are
/// prepended or appended; hydration and [`ResourceRequest::Replace`] keep the order they are
/// given. [`ResourceRequest::List`] always answers in store order.
///
/// # Commits
/// Every mutation that actually changes the store (a create, an update or delete of a known
/// id, a successful action, an applied replace) is a *commit*. A commit bumps the
/// [`Generation`] and hands the full collection to the [`Persistence`] backend before the
/// caller is answered. Requests against unknown ids commit nothing.
///
/// # Usage Pattern
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Product>::new(32, next_id)
///     .with_placement(Placement::Front)
///     .with_persistence(storage);
/// tokio::spawn(actor.run(()));
/// let id = client.create(params).await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    placement: Placement,
    persistence: Box<dyn Persistence<T>>,
    generation: Generation,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `next_id_fn` - Produces the id for each `Create` request.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
            placement: Placement::default(),
            persistence: Box::new(NoPersistence),
            generation: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Attaches the backend used for hydration and for writes after each commit.
    pub fn with_persistence(mut self, persistence: impl Persistence<T> + 'static) -> Self {
        self.persistence = Box::new(persistence);
        self
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The store is hydrated from the persistence backend before the first message is
    /// handled, so early requests already see the saved collection. A failed load is logged
    /// and the actor starts empty.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        self.hydrate(entity_type).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.insert(id.clone(), item);
                            self.commit(entity_type).await;
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let outcome = match self.store.get_mut(&id) {
                        Some(item) => Some(
                            item.on_update(update, &context)
                                .await
                                .map(|()| item.clone()),
                        ),
                        None => None,
                    };
                    match outcome {
                        Some(Ok(item)) => {
                            self.commit(entity_type).await;
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(Some(item)));
                        }
                        Some(Err(e)) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                        None => {
                            debug!(entity_type, %id, "Update skipped, not found");
                            let _ = respond_to.send(Ok(None));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let hook = match self.store.get(&id) {
                        Some(item) => Some(item.on_delete(&context).await),
                        None => None,
                    };
                    match hook {
                        Some(Ok(())) => {
                            self.store.shift_remove(&id);
                            self.commit(entity_type).await;
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            let _ = respond_to.send(Ok(true));
                        }
                        Some(Err(e)) => {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                        None => {
                            debug!(entity_type, %id, "Delete skipped, not found");
                            let _ = respond_to.send(Ok(false));
                        }
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let outcome = match self.store.get_mut(&id) {
                        Some(item) => Some(item.handle_action(action, &context).await),
                        None => None,
                    };
                    match outcome {
                        Some(Ok(result)) => {
                            self.commit(entity_type).await;
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(Some(result)));
                        }
                        Some(Err(e)) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                        None => {
                            debug!(entity_type, %id, "Action skipped, not found");
                            let _ = respond_to.send(Ok(None));
                        }
                    }
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Stats { respond_to } => {
                    let _ = respond_to.send(Ok(StoreStats {
                        len: self.store.len(),
                        generation: self.generation,
                    }));
                }
                ResourceRequest::Replace {
                    items,
                    expected_generation,
                    respond_to,
                } => {
                    if expected_generation != self.generation {
                        warn!(
                            entity_type,
                            expected_generation,
                            current = self.generation,
                            "Replace stale"
                        );
                        let _ = respond_to.send(Ok(ReplaceOutcome::Stale {
                            current: self.generation,
                        }));
                        continue;
                    }

                    let incoming = items.len();
                    let mut replacement = IndexMap::with_capacity(incoming);
                    for item in items {
                        replacement.insert(item.id().clone(), item);
                    }
                    if replacement.len() != incoming {
                        warn!(
                            entity_type,
                            incoming,
                            kept = replacement.len(),
                            "Replace collapsed duplicate ids"
                        );
                    }

                    self.store = replacement;
                    self.commit(entity_type).await;
                    info!(
                        entity_type,
                        size = self.store.len(),
                        generation = self.generation,
                        "Replaced"
                    );
                    let _ = respond_to.send(Ok(ReplaceOutcome::Applied {
                        len: self.store.len(),
                    }));
                }
            }
        }

        info!(entity_type, size = self.store.len(), generation = self.generation, "Shutdown");
    }

    async fn hydrate(&mut self, entity_type: &str) {
        match self.persistence.load().await {
            Ok(items) => {
                for item in items {
                    self.store.insert(item.id().clone(), item);
                }
                info!(entity_type, size = self.store.len(), "Hydrated");
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Hydration failed, starting empty");
            }
        }
    }

    fn insert(&mut self, id: T::Id, item: T) {
        match self.placement {
            Placement::Front => {
                self.store.shift_insert(0, id, item);
            }
            Placement::Back => {
                self.store.insert(id, item);
            }
        }
    }

    async fn commit(&mut self, entity_type: &str) {
        self.generation += 1;
        let items: Vec<T> = self.store.values().cloned().collect();
        if let Err(e) = self.persistence.save(&items).await {
            // The in-memory store stays authoritative; the next commit retries the write.
            warn!(entity_type, generation = self.generation, error = %e, "Persist failed");
        }
    }
}
