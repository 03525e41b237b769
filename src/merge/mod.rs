pub mod dispatch;
pub mod merger;
mod orchestrator;
mod outcome;
pub mod planner;
mod request;

#[cfg(test)]
mod request_test;

pub use orchestrator::{MergeMode, PageMerge};
pub use outcome::{MergeOutcome, RowResult};
pub use request::PageRequest;
