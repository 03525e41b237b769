use tracing::{debug, trace};

use super::assembler::tag_rows;
use crate::errors::MergeError;
use crate::merge::RowResult;
use crate::merge::planner::OffsetPlanner;
use crate::merge::request::PageRequest;
use crate::source::SharedSource;

/// Walks sources one after another, deriving each window from what the
/// previous sources actually yielded.
pub struct SequentialMerger {
    request: PageRequest,
    planner: OffsetPlanner,
}

impl SequentialMerger {
    pub fn new(request: PageRequest) -> Self {
        Self {
            request,
            planner: OffsetPlanner::new(request),
        }
    }

    /// Returns the summed total and the assembled page.
    ///
    /// Every source is fetched, even once the page is full, so that `total`
    /// covers all of them. After the page fills, later sources are read from
    /// their start.
    pub async fn merge<T: Send + 'static>(
        &self,
        sources: &[SharedSource<T>],
    ) -> Result<(usize, Vec<RowResult<T>>), MergeError> {
        let page_size = self.request.page_size();
        let end = self.request.end();
        let final_offset = self.request.offset();

        let mut offset = final_offset;
        let mut total = 0usize;
        let mut rows: Vec<RowResult<T>> = Vec::with_capacity(page_size);

        for source in sources {
            let window = self.planner.sequential_window(offset);
            let fetched = source
                .fetch(window.page, window.page_size, window.offset)
                .await
                .map_err(|cause| MergeError::fetch(source.name(), cause))?;
            total += fetched.total;

            if rows.len() < page_size {
                rows.extend(tag_rows(source.name(), fetched.rows, window.skip()));
            }

            offset = if rows.len() < page_size {
                let limit = page_size - rows.len();
                end.saturating_sub(total).saturating_sub(limit)
            } else {
                0
            };

            trace!(
                target: "page_merge::merge",
                source = %source.name(),
                page = window.page,
                page_size = window.page_size,
                collected = rows.len(),
                total,
                next_offset = offset,
                "Sequential step done"
            );
        }

        if total < end && total > final_offset {
            let available = total - final_offset;
            if rows.len() > available {
                let excess = rows.len() - available;
                debug!(
                    target: "page_merge::merge",
                    excess,
                    available,
                    "Dropping leading rows past the last source"
                );
                rows.drain(..excess);
            }
        }
        rows.truncate(page_size);

        Ok((total, rows))
    }
}
