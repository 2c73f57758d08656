// modport/src/error.rs
use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Outcome of a single import attempt that did not produce an export.
///
/// Only `NotFound` is recoverable: the resolver treats it as "keep
/// looking" and moves on to the next candidate or phase. Everything
/// else means the target exists but is broken, and aborts the whole
/// resolution so the cause reaches the caller unchanged.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Module Not Found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImportError {
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ImportError::Other(Arc::new(err))
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Other(Arc::new(err))
    }
}

/// Terminal error returned by [`Resolver::resolve`](crate::Resolver::resolve).
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    /// Every candidate missed in both the local and the global phase.
    #[error("Cannot find modules: '{}'", .candidates.join("', '"))]
    Exhausted { candidates: Vec<String> },

    /// A candidate was found but failed to load. Carries the original
    /// cause verbatim.
    #[error(transparent)]
    Import(ImportError),
}
