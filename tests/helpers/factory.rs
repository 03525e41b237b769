pub use super::factories::{
    FailingSourceFactory, MemorySourceFactory, OrderedIdLookupFactory,
};

pub struct Factory;

impl Factory {
    pub fn memory_source() -> MemorySourceFactory {
        MemorySourceFactory::new()
    }

    pub fn failing_source() -> FailingSourceFactory {
        FailingSourceFactory::new()
    }

    pub fn ordered_id_lookup() -> OrderedIdLookupFactory {
        OrderedIdLookupFactory::new()
    }
}
