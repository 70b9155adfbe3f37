//! `tr-core` — foundational types for the transit routing workspace.
//!
//! This crate is a dependency of every other `tr-*` crate.  It intentionally
//! has no `tr-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `StopId`, `BusId`, `VertexId`, `EdgeId`              |
//! | [`config`] | `RoutingConfig`, `ride_minutes`                      |
//! | [`view`]   | `CatalogueView` trait                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |
//!           | Required by `tr-persist`.                               |

pub mod config;
pub mod ids;
pub mod view;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ride_minutes, RoutingConfig};
pub use ids::{BusId, EdgeId, StopId, VertexId};
pub use view::CatalogueView;
