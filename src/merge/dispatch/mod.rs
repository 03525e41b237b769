mod count;
mod fan_out;
mod fetch;

#[cfg(test)]
mod fetch_test;

pub use count::CountDispatcher;
pub use fan_out::FanOut;
pub use fetch::{FetchDispatcher, SourceBatch};
