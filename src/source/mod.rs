mod fn_source;
mod memory;
mod traits;


pub use fn_source::FnSource;
pub use memory::{Addressing, MemorySource};
pub use traits::{PageSource, SharedSource, SourcePage};
