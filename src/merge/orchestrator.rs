use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use super::dispatch::{CountDispatcher, FanOut, FetchDispatcher};
use super::merger::{PageAssembler, SequentialMerger};
use super::outcome::MergeOutcome;
use super::planner::OffsetPlanner;
use super::request::PageRequest;
use crate::errors::MergeError;
use crate::neighbor::{NeighborLookup, NeighborResolver, Neighbors};
use crate::source::SharedSource;

/// Which merge strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Sources fetched one after another; works with offset-capable sources.
    Sync,
    /// Counts first, then every needed source fetched concurrently.
    #[default]
    Async,
}

impl FromStr for MergeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sync" => Ok(MergeMode::Sync),
            "async" => Ok(MergeMode::Async),
            other => Err(format!("unknown merge mode '{}', expected sync or async", other)),
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeMode::Sync => f.write_str("sync"),
            MergeMode::Async => f.write_str("async"),
        }
    }
}

/// Splices one logical page out of an ordered list of sources.
pub struct PageMerge<T> {
    request: PageRequest,
    sources: Vec<SharedSource<T>>,
    max_inflight: Option<usize>,
}

impl<T: Send + 'static> PageMerge<T> {
    pub fn new(page: usize, page_size: usize, sources: Vec<SharedSource<T>>) -> Self {
        Self::from_request(PageRequest::new(page, page_size), sources)
    }

    pub fn from_request(request: PageRequest, sources: Vec<SharedSource<T>>) -> Self {
        Self {
            request,
            sources,
            max_inflight: None,
        }
    }

    pub fn with_padding(mut self, padding_mode: bool) -> Self {
        self.request = self.request.with_padding(padding_mode);
        self
    }

    /// Caps how many source calls run at once during the async phases.
    pub fn with_max_inflight(mut self, max_inflight: Option<usize>) -> Self {
        self.max_inflight = max_inflight;
        self
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn sources(&self) -> &[SharedSource<T>] {
        &self.sources
    }

    pub async fn merge(&self, mode: MergeMode) -> Result<MergeOutcome<T>, MergeError> {
        match mode {
            MergeMode::Sync => self.sync_merge().await,
            MergeMode::Async => self.async_merge().await,
        }
    }

    /// Sequential merge: each source's window depends on what the previous
    /// sources returned.
    pub async fn sync_merge(&self) -> Result<MergeOutcome<T>, MergeError> {
        debug!(
            target: "page_merge::merge",
            page = self.request.page(),
            page_size = self.request.page_size(),
            padding = self.request.padding_mode(),
            sources = self.sources.len(),
            "Starting sync merge"
        );

        let (total, rows) = SequentialMerger::new(self.request)
            .merge(&self.sources)
            .await
            .inspect_err(MergeError::log_error)?;

        info!(
            target: "page_merge::merge",
            total,
            rows = rows.len(),
            "Sync merge complete"
        );
        Ok(MergeOutcome::new(&self.request, total, rows))
    }

    /// Concurrent merge: counts every source, plans, then fetches the needed
    /// sources in parallel and restores source order.
    pub async fn async_merge(&self) -> Result<MergeOutcome<T>, MergeError> {
        debug!(
            target: "page_merge::merge",
            page = self.request.page(),
            page_size = self.request.page_size(),
            padding = self.request.padding_mode(),
            sources = self.sources.len(),
            "Starting async merge"
        );

        let fan_out = FanOut::new(self.max_inflight);

        let counted = CountDispatcher::new(fan_out.clone())
            .dispatch(&self.sources)
            .await
            .inspect_err(MergeError::log_error)?;
        let total: usize = counted.iter().map(|source| source.count).sum();

        let plans = OffsetPlanner::new(self.request).plan(&counted);
        if plans.is_empty() {
            info!(
                target: "page_merge::merge",
                total,
                "Requested page lies past every source"
            );
            return Ok(MergeOutcome::new(&self.request, total, Vec::new()));
        }

        let batches = FetchDispatcher::new(fan_out)
            .dispatch(&self.sources, plans)
            .await
            .inspect_err(MergeError::log_error)?;
        let rows = PageAssembler::new(self.request.page_size()).assemble(batches);

        info!(
            target: "page_merge::merge",
            total,
            rows = rows.len(),
            "Async merge complete"
        );
        Ok(MergeOutcome::new(&self.request, total, rows))
    }

    /// Resolves the previous and next ids around `current_id` across ordered lookups.
    pub async fn pre_and_next(
        &self,
        current_id: &str,
        lookups: &[Arc<dyn NeighborLookup>],
    ) -> Result<Neighbors, MergeError> {
        NeighborResolver::new(lookups)
            .resolve(current_id)
            .await
            .inspect_err(MergeError::log_error)
    }
}
