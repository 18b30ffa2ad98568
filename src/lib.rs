//! # Product Catalog
//!
//! A local product catalog kept in a single actor and mirrored to a JSON snapshot file.
//! Products can be added, edited, deleted, liked, searched and paged, and an empty catalog
//! can be seeded from a public demo API.
//!
//! ## Module Tour
//!
//! ### 1. The Entity ([`model`], [`product_actor`])
//! [`Product`](model::Product) implements [`ActorEntity`](actor_framework::ActorEntity), so
//! the generic [`ResourceActor`](actor_framework::ResourceActor) can own the collection.
//! Liking is a custom action; the liked view is a query, not a second list.
//!
//! ### 2. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) wraps the generic client with product-typed
//! methods and maps framework errors into [`ProductError`](product_actor::ProductError).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`ProductStore`](lifecycle::ProductStore) starts the actor, holds the filter/search view
//! and the load status, and runs the guarded remote load.
//!
//! ### 4. The Edges ([`storage`], [`remote`], [`config`], [`cli`])
//! Snapshot file persistence, the remote catalog, configuration and the `catalog` commands.
//!
//! ## Running
//!
//! ```bash
//! catalog load
//! RUST_LOG=info catalog list --search pen
//! catalog add --title Pen --description "Blue ink" --price 1.5 --category Stationery --image pen.png
//! ```

pub mod cli;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod remote;
pub mod storage;
