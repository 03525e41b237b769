use thiserror::Error;
use tracing::{debug, error};

/// Error type returned by caller-supplied source callables.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a merge call. No partial page is ever returned alongside one.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("fetch from source '{name}' failed: {cause}")]
    Fetch {
        name: String,
        #[source]
        cause: BoxError,
    },

    #[error("count of source '{name}' failed: {cause}")]
    Count {
        name: String,
        #[source]
        cause: BoxError,
    },

    #[error("neighbor lookup '{name}' failed: {cause}")]
    Neighbor {
        name: String,
        #[source]
        cause: BoxError,
    },

    #[error("merge worker failed to join: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("fan-in closed before all workers reported ({received} of {expected})")]
    Incomplete { received: usize, expected: usize },
}

impl MergeError {
    pub fn fetch(name: impl Into<String>, cause: BoxError) -> Self {
        MergeError::Fetch {
            name: name.into(),
            cause,
        }
    }

    pub fn count(name: impl Into<String>, cause: BoxError) -> Self {
        MergeError::Count {
            name: name.into(),
            cause,
        }
    }

    pub fn neighbor(name: impl Into<String>, cause: BoxError) -> Self {
        MergeError::Neighbor {
            name: name.into(),
            cause,
        }
    }

    /// Name of the source that caused the failure, when one is known.
    pub fn source_name(&self) -> Option<&str> {
        match self {
            MergeError::Fetch { name, .. }
            | MergeError::Count { name, .. }
            | MergeError::Neighbor { name, .. } => Some(name),
            MergeError::Join(_) | MergeError::Incomplete { .. } => None,
        }
    }

    pub fn log_error(&self) {
        match self {
            MergeError::Fetch { name, cause } => {
                error!(target: "page_merge::dispatch", source = %name, "Fetch failed: {}", cause);
                debug!("Fetch error details: {:?}", cause);
            }
            MergeError::Count { name, cause } => {
                error!(target: "page_merge::dispatch", source = %name, "Count failed: {}", cause);
                debug!("Count error details: {:?}", cause);
            }
            MergeError::Neighbor { name, cause } => {
                error!(target: "page_merge::neighbor", lookup = %name, "Neighbor lookup failed: {}", cause);
                debug!("Neighbor lookup error details: {:?}", cause);
            }
            MergeError::Join(e) => {
                error!(target: "page_merge::dispatch", "Worker join failed: {}", e);
            }
            MergeError::Incomplete { received, expected } => {
                error!(
                    target: "page_merge::dispatch",
                    received, expected, "Fan-in closed early"
                );
            }
        }
    }
}
