//! Itinerary result types.

use std::fmt;

/// One step of an itinerary.
///
/// Exactly two step kinds exist by construction (the graph has exactly two
/// edge kinds), so the enum is closed and matched exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Wait at `stop` for the configured boarding delay.
    Wait { stop: String, minutes: f64 },
    /// Ride `bus` across `span_count` stop-to-stop hops.
    Ride {
        bus:        String,
        span_count: u32,
        minutes:    f64,
    },
}

impl Step {
    /// Duration of this step in minutes.
    pub fn minutes(&self) -> f64 {
        match self {
            Step::Wait { minutes, .. } | Step::Ride { minutes, .. } => *minutes,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Wait { stop, minutes } => {
                write!(f, "wait {minutes} min at {stop}")
            }
            Step::Ride { bus, span_count, minutes } => {
                write!(f, "ride bus {bus} for {span_count} stops ({minutes} min)")
            }
        }
    }
}

/// A successful query result: ordered steps plus total elapsed time.
///
/// `total_min` is the solver's stored weight; it equals the sum of step
/// durations up to floating-point rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub total_min: f64,
    pub steps:     Vec<Step>,
}

impl Itinerary {
    /// The trivial from == to itinerary.
    pub fn empty() -> Self {
        Self { total_min: 0.0, steps: Vec::new() }
    }
}
