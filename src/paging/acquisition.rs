use std::future::Future;

use tracing::debug;

/// Calls a handler for page 1, 2, 3, ... until it reports no more pages.
pub struct PagingAcquisition<F> {
    handle: F,
}

impl<F, Fut, E> PagingAcquisition<F>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    pub fn new(handle: F) -> Self {
        Self { handle }
    }

    /// Stops cleanly when the handler returns `Ok(false)`; the first error is returned as-is.
    pub async fn run(mut self) -> Result<(), E> {
        let mut page: u64 = 1;
        while (self.handle)(page).await? {
            page += 1;
        }
        debug!(target: "page_merge::paging", last_page = page, "Paging acquisition finished");
        Ok(())
    }
}
