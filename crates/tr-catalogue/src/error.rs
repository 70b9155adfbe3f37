use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("bus {0:?} declared twice")]
    DuplicateBus(String),

    #[error("bus {0:?} has no stops")]
    EmptyBus(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("catalogue parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
