//! `tr-persist` — persistence for the solved routing engine.
//!
//! Serializes a [`tr_engine::TransitRouter`]'s complete state (plus the
//! catalogue it was built from) to a versioned binary blob, and
//! reconstructs an equivalent, already-solved engine from that blob.  The
//! round-trip contract: a loaded engine answers every query identically to
//! the engine that was saved.

pub mod error;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PersistError, PersistResult};
pub use snapshot::{load_from_file, save_to_file, Snapshot, MAGIC, VERSION};
