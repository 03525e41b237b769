use tracing::debug;

use crate::merge::RowResult;
use crate::merge::dispatch::SourceBatch;

/// Drops `skip` padding rows from the front and tags the rest with `source_name`.
pub fn tag_rows<T>(source_name: &str, rows: Vec<T>, skip: usize) -> Vec<RowResult<T>> {
    rows.into_iter()
        .skip(skip)
        .map(|payload| RowResult::new(source_name, payload))
        .collect()
}

/// Reassembles fanned-in batches into one page.
pub struct PageAssembler {
    page_size: usize,
}

impl PageAssembler {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Restores plan order, concatenates, and caps at the page size.
    pub fn assemble<T>(&self, mut batches: Vec<SourceBatch<T>>) -> Vec<RowResult<T>> {
        batches.sort_by_key(|batch| batch.plan_index);

        let mut rows = Vec::with_capacity(self.page_size);
        for batch in batches {
            rows.extend(batch.rows);
        }

        if rows.len() > self.page_size {
            debug!(
                target: "page_merge::merge",
                fetched = rows.len(),
                page_size = self.page_size,
                "Capping assembled page"
            );
            rows.truncate(self.page_size);
        }

        rows
    }
}
