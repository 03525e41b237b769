use std::sync::Arc;

use tracing::{debug, info};

use super::fan_out::FanOut;
use crate::errors::MergeError;
use crate::merge::planner::CountedSource;
use crate::source::SharedSource;

/// Asks every source for its row count concurrently.
pub struct CountDispatcher {
    fan_out: FanOut,
}

impl CountDispatcher {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }

    /// Returns one entry per source, in source-list order.
    pub async fn dispatch<T: Send + 'static>(
        &self,
        sources: &[SharedSource<T>],
    ) -> Result<Vec<CountedSource>, MergeError> {
        let jobs = sources
            .iter()
            .map(|source| {
                let source = Arc::clone(source);
                async move {
                    let name = source.name().to_string();
                    debug!(target: "page_merge::dispatch", source = %name, "Counting source");
                    let count = source
                        .count()
                        .await
                        .map_err(|cause| MergeError::count(name.as_str(), cause))?;
                    Ok::<_, MergeError>(CountedSource::new(name, count))
                }
            })
            .collect::<Vec<_>>();

        let mut counted = self.fan_out.run(jobs).await?;
        counted.sort_by_key(|(index, _)| *index);
        let counted: Vec<CountedSource> = counted.into_iter().map(|(_, c)| c).collect();

        info!(
            target: "page_merge::dispatch",
            sources = counted.len(),
            total = counted.iter().map(|c| c.count).sum::<usize>(),
            "Count phase complete"
        );

        Ok(counted)
    }
}
