mod assembler;
mod sequential;


pub use assembler::{PageAssembler, tag_rows};
pub use sequential::SequentialMerger;
