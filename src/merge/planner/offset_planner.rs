use tracing::debug;

use super::fetch_plan::{CountedSource, FetchPlan};
use super::window::PhysicalWindow;
use crate::merge::request::PageRequest;

/// Turns a logical page into per-source fetch plans. Never fetches.
#[derive(Debug, Clone, Copy)]
pub struct OffsetPlanner {
    request: PageRequest,
}

impl OffsetPlanner {
    pub fn new(request: PageRequest) -> Self {
        Self { request }
    }

    /// Window for one step of the sequential walk, given the offset still owed.
    pub fn sequential_window(&self, remaining_offset: usize) -> PhysicalWindow {
        PhysicalWindow::locate(
            remaining_offset,
            self.request.page_size(),
            self.request.padding_mode(),
        )
    }

    /// Plans fetches from counts known up front, in source-list order.
    ///
    /// Empty sources are skipped. A source is included once the running row
    /// count passes the page offset; planning stops once it reaches the end
    /// of the page.
    pub fn plan(&self, counted: &[CountedSource]) -> Vec<FetchPlan> {
        let offset = self.request.offset();
        let end = self.request.end();
        let mut data_count = 0usize;
        let mut plans = Vec::new();

        for (source_index, source) in counted.iter().enumerate() {
            if source.count == 0 {
                continue;
            }
            data_count += source.count;

            if data_count > offset {
                let local_offset = offset.saturating_sub(data_count - source.count);
                let window = PhysicalWindow::locate(
                    local_offset,
                    self.request.page_size(),
                    self.request.padding_mode(),
                );

                debug!(
                    target: "page_merge::planner",
                    source = %source.name,
                    page = window.page,
                    page_size = window.page_size,
                    offset = window.offset,
                    leading_skip = window.leading_skip,
                    "Planned source fetch"
                );

                plans.push(FetchPlan {
                    source_index,
                    source_name: source.name.clone(),
                    window,
                });
            }

            if data_count >= end {
                break;
            }
        }

        plans
    }
}
