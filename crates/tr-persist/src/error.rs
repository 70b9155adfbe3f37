//! Persistence error type.
//!
//! Every failure here is fatal for the current save/load: a failed decode
//! returns no partial snapshot, and nothing is retried internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("not a snapshot: bad magic")]
    BadMagic,

    #[error("snapshot truncated before the header ended")]
    Truncated,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("snapshot encode error: {0}")]
    Encode(String),

    #[error("snapshot decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;
