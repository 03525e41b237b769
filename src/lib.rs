pub mod errors;
pub mod logging;
pub mod merge;
pub mod neighbor;
pub mod paging;
pub mod shared;
pub mod source;

pub use errors::{BoxError, MergeError};
pub use merge::{MergeMode, MergeOutcome, PageMerge, PageRequest, RowResult};
pub use neighbor::{NeighborLookup, NeighborLookupResult, Neighbors};
pub use paging::PagingAcquisition;
pub use source::{Addressing, FnSource, MemorySource, PageSource, SharedSource, SourcePage};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
