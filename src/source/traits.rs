use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::BoxError;

/// One slice of a source, as returned by its fetch callable.
///
/// `total` is always the source's full row count, whichever slice `rows` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage<T> {
    pub total: usize,
    pub rows: Vec<T>,
}

impl<T> SourcePage<T> {
    pub fn new(total: usize, rows: Vec<T>) -> Self {
        Self { total, rows }
    }

    pub fn empty(total: usize) -> Self {
        Self {
            total,
            rows: Vec::new(),
        }
    }
}

/// A named, independently paginated data source.
///
/// Implementations decide whether they honour `page`/`page_size` or
/// `offset`/`page_size`; the merge passes all three on every call.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(
        &self,
        page: usize,
        page_size: usize,
        offset: usize,
    ) -> Result<SourcePage<T>, BoxError>;

    async fn count(&self) -> Result<usize, BoxError>;
}

pub type SharedSource<T> = Arc<dyn PageSource<T>>;
