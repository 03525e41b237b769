mod resolver;
mod types;


pub use resolver::NeighborResolver;
pub use types::{NeighborLookup, NeighborLookupResult, Neighbors};
