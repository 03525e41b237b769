use async_trait::async_trait;
use serde::Serialize;

use crate::errors::BoxError;

/// Ids of the rows immediately before and after a current row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub pre: Option<String>,
    pub next: Option<String>,
}

impl Neighbors {
    pub fn new(pre: Option<&str>, next: Option<&str>) -> Self {
        Self {
            pre: pre.map(str::to_string),
            next: next.map(str::to_string),
        }
    }

    /// Empty strings count as absent.
    pub(crate) fn normalized(self) -> Self {
        Self {
            pre: self.pre.filter(|id| !id.is_empty()),
            next: self.next.filter(|id| !id.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pre.is_none() && self.next.is_none()
    }
}

/// What one lookup knows about the current row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborLookupResult {
    pub neighbors: Neighbors,
    /// Whether this lookup's range contains the current row.
    pub has_current: bool,
}

impl NeighborLookupResult {
    pub fn new(neighbors: Neighbors, has_current: bool) -> Self {
        Self {
            neighbors,
            has_current,
        }
    }
}

/// Per-source neighbor lookup.
///
/// `current_id` is `None` once an earlier lookup has claimed the current row;
/// the lookup should then report its own boundary.
#[async_trait]
pub trait NeighborLookup: Send + Sync {
    fn name(&self) -> &str;

    async fn lookup(&self, current_id: Option<&str>) -> Result<NeighborLookupResult, BoxError>;
}
