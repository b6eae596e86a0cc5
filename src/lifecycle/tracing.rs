//! Tracing setup for the whole system.
//!
//! Structured logging via the `tracing` crate, filtered with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and commit events
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); actors tag
//! their lines with an `entity_type` field instead, which reads better and
//! filters just as well.

/// Initializes the global tracing subscriber. Call once, before any actor
/// starts.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
