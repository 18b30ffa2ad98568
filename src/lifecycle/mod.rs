//! Starting, driving and stopping the product actor.

mod product_store;

pub use product_store::*;
