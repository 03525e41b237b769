pub mod failing_source_factory;
pub mod memory_source_factory;
pub mod ordered_id_lookup_factory;

#[cfg(test)]
mod memory_source_factory_test;
#[cfg(test)]
mod ordered_id_lookup_factory_test;

pub use failing_source_factory::FailingSourceFactory;
pub use memory_source_factory::MemorySourceFactory;
pub use ordered_id_lookup_factory::{OrderedIdLookup, OrderedIdLookupFactory};
