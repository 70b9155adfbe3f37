//! `tr-catalogue` — the in-memory transit catalogue.
//!
//! Stores stops, bus lines (direction-expanded), and directional road
//! distances, and implements [`tr_core::CatalogueView`] — the read-only
//! seam the routing engine builds from.  Populate it programmatically or
//! through the CSV [`loader`].

pub mod catalogue;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalogue::{Bus, Stop, TransitCatalogue};
pub use error::{CatalogueError, CatalogueResult};
pub use loader::{load_catalogue, load_catalogue_files};
