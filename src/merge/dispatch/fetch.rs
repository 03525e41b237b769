use std::sync::Arc;

use tracing::{debug, info};

use super::fan_out::FanOut;
use crate::errors::MergeError;
use crate::merge::RowResult;
use crate::merge::merger::tag_rows;
use crate::merge::planner::FetchPlan;
use crate::source::SharedSource;

/// Rows one worker fetched for one plan, already trimmed and tagged.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch<T> {
    pub plan_index: usize,
    pub rows: Vec<RowResult<T>>,
}

/// Executes fetch plans concurrently, one worker per plan.
pub struct FetchDispatcher {
    fan_out: FanOut,
}

impl FetchDispatcher {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }

    /// Batches come back in completion order; callers restore plan order.
    pub async fn dispatch<T: Send + 'static>(
        &self,
        sources: &[SharedSource<T>],
        plans: Vec<FetchPlan>,
    ) -> Result<Vec<SourceBatch<T>>, MergeError> {
        let jobs = plans
            .into_iter()
            .filter_map(|plan| {
                let source = sources.get(plan.source_index).map(Arc::clone)?;
                Some(async move {
                    let window = plan.window;
                    debug!(
                        target: "page_merge::dispatch",
                        source = %plan.source_name,
                        page = window.page,
                        page_size = window.page_size,
                        offset = window.offset,
                        "Fetching source window"
                    );
                    let fetched = source
                        .fetch(window.page, window.page_size, window.offset)
                        .await
                        .map_err(|cause| MergeError::fetch(plan.source_name.as_str(), cause))?;
                    Ok::<_, MergeError>(tag_rows(
                        &plan.source_name,
                        fetched.rows,
                        window.skip(),
                    ))
                })
            })
            .collect::<Vec<_>>();

        let batches = self
            .fan_out
            .run(jobs)
            .await?
            .into_iter()
            .map(|(plan_index, rows)| SourceBatch { plan_index, rows })
            .collect::<Vec<_>>();

        info!(
            target: "page_merge::dispatch",
            batches = batches.len(),
            "Fetch phase complete"
        );

        Ok(batches)
    }
}
