//! Routing configuration and unit conversion.
//!
//! # Units
//!
//! The catalogue stores road distances in **metres**; bus velocity is given
//! in **km/h**; every weight in the routing graph is in **minutes**.  The
//! single conversion lives in [`ride_minutes`]:
//!
//!   minutes = metres * 0.06 / velocity_kmh
//!
//! (`* 0.001` metres → km, `* 60` hours → minutes, folded into `0.06`.)

/// Parameters of the routing model, supplied once at build time and never
/// mutated afterwards.
///
/// `RoutingConfig` is cheap to copy and intentionally holds no heap data.
/// Typically loaded from a TOML/JSON file by the application crate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Fixed boarding delay at every stop, in whole minutes.
    pub wait_time_min: u32,

    /// Cruising velocity assumed for every bus, in km/h.  Must be positive;
    /// the engine builder rejects non-positive values.
    pub bus_velocity_kmh: f64,
}

impl RoutingConfig {
    /// Weight of a wait edge in minutes.
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.wait_time_min)
    }
}

/// Minutes needed to ride `meters` of road at `velocity_kmh`.
#[inline]
pub fn ride_minutes(meters: f64, velocity_kmh: f64) -> f64 {
    meters * 0.06 / velocity_kmh
}
