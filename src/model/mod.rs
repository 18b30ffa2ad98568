//! Pure data structures (DTOs) managed by the product actor.

pub mod page;
pub mod product;

pub use page::*;
pub use product::*;
