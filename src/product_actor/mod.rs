//! Product-specific resource logic: the entity impl, its actions and its error type.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::{Placement, ResourceActor};

/// Creates a new Product actor and its client.
///
/// Products get random UUIDs and are kept newest first.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32, ProductId::generate);
    let client = ProductClient::new(generic_client);

    (actor.with_placement(Placement::Front), client)
}
