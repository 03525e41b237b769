use std::future::Future;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use super::traits::{PageSource, SourcePage};
use crate::errors::BoxError;

type FetchFn<T> = Box<
    dyn Fn(usize, usize, usize) -> BoxFuture<'static, Result<SourcePage<T>, BoxError>>
        + Send
        + Sync,
>;
type CountFn = Box<dyn Fn() -> BoxFuture<'static, Result<usize, BoxError>> + Send + Sync>;

/// Adapts a pair of async closures into a [`PageSource`].
pub struct FnSource<T> {
    name: String,
    fetch: FetchFn<T>,
    count: CountFn,
}

impl<T: Send + 'static> FnSource<T> {
    pub fn new<F, FFut, C, CFut>(name: impl Into<String>, fetch: F, count: C) -> Self
    where
        F: Fn(usize, usize, usize) -> FFut + Send + Sync + 'static,
        FFut: Future<Output = Result<SourcePage<T>, BoxError>> + Send + 'static,
        C: Fn() -> CFut + Send + Sync + 'static,
        CFut: Future<Output = Result<usize, BoxError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            fetch: Box::new(move |page, page_size, offset| {
                fetch(page, page_size, offset).boxed()
            }),
            count: Box::new(move || count().boxed()),
        }
    }
}

#[async_trait]
impl<T: Send + 'static> PageSource<T> for FnSource<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(
        &self,
        page: usize,
        page_size: usize,
        offset: usize,
    ) -> Result<SourcePage<T>, BoxError> {
        (self.fetch)(page, page_size, offset).await
    }

    async fn count(&self) -> Result<usize, BoxError> {
        (self.count)().await
    }
}
