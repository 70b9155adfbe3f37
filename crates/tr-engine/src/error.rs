//! Engine error type.
//!
//! "No route" is deliberately **not** here: an unreachable pair is a normal
//! query outcome, signalled by `Option::None` from
//! [`TransitRouter::route`](crate::TransitRouter::route).  Errors are
//! reserved for build-time precondition violations, which abort the build.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A bus runs between two consecutive stops with no configured road
    /// distance in either direction.  Defaulting to zero would corrupt
    /// every downstream shortest-path result, so the build aborts.
    #[error("bus {bus:?}: no road distance configured between {from:?} and {to:?}")]
    MissingDistance {
        bus:  String,
        from: String,
        to:   String,
    },

    #[error("invalid routing configuration: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
