//! Custom actions for the Product actor.
//!
//! Liking is the one operation beyond plain CRUD: it flips a flag and reports the new value
//! in a single round trip, so callers never read-modify-write across two messages.

/// Custom actions for Product entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Flips `is_liked`.
    ToggleLike,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductActionResult {
    /// The product's `is_liked` after the toggle.
    ToggleLike(bool),
}
