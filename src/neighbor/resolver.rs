use std::sync::Arc;

use tracing::{debug, trace};

use super::types::{NeighborLookup, Neighbors};
use crate::errors::MergeError;

/// Walks neighbor lookups in order to find the previous and next ids.
pub struct NeighborResolver<'a> {
    lookups: &'a [Arc<dyn NeighborLookup>],
}

impl<'a> NeighborResolver<'a> {
    pub fn new(lookups: &'a [Arc<dyn NeighborLookup>]) -> Self {
        Self { lookups }
    }

    /// Any `pre` seen overwrites the running one; the first `next` ends the walk.
    pub async fn resolve(&self, current_id: &str) -> Result<Neighbors, MergeError> {
        let mut result = Neighbors::default();
        let mut current = Some(current_id);

        for lookup in self.lookups {
            let found = lookup
                .lookup(current)
                .await
                .map_err(|cause| MergeError::neighbor(lookup.name(), cause))?;
            if found.has_current {
                current = None;
            }

            let neighbors = found.neighbors.normalized();
            trace!(
                target: "page_merge::neighbor",
                lookup = %lookup.name(),
                has_current = found.has_current,
                pre = ?neighbors.pre,
                next = ?neighbors.next,
                "Lookup answered"
            );
            if neighbors.is_empty() {
                continue;
            }

            if neighbors.pre.is_some() {
                result.pre = neighbors.pre;
            }
            if neighbors.next.is_some() {
                result.next = neighbors.next;
                break;
            }
        }

        debug!(
            target: "page_merge::neighbor",
            current = current_id,
            pre = ?result.pre,
            next = ?result.next,
            "Resolved neighbors"
        );
        Ok(result)
    }
}
