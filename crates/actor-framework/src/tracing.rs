//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter shared by every binary built
//! on this framework.
//!
//! - **Filtering** via `RUST_LOG`; `warn` when the variable is unset or invalid.
//! - **Compact format** without module paths; the actor logs an `entity_type` field instead.
//! - **stderr output**, so a command-line tool can keep stdout for its own results.
//!
//! ```bash
//! RUST_LOG=info catalog list      # actor lifecycle and commits
//! RUST_LOG=debug catalog list     # full payloads and queries
//! ```
//!
//! With `RUST_LOG=info` a create looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Hydrated entity_type="Product" size=3
//! INFO Created entity_type="Product" id=0f6c… size=4
//! INFO Shutdown entity_type="Product" size=4 generation=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
