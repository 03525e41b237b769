use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::MergeError;

/// Runs one tokio task per job and fans results back in over a channel.
///
/// Results come back tagged with their job index, in completion order. The
/// first failing job aborts the others and its error is returned.
#[derive(Debug, Clone, Default)]
pub struct FanOut {
    limiter: Option<Arc<Semaphore>>,
}

impl FanOut {
    /// `max_inflight` bounds how many jobs may run at once; `None` or 0 is unbounded.
    pub fn new(max_inflight: Option<usize>) -> Self {
        Self {
            limiter: max_inflight
                .filter(|limit| *limit > 0)
                .map(|limit| Arc::new(Semaphore::new(limit))),
        }
    }

    pub async fn run<R, F>(&self, jobs: Vec<F>) -> Result<Vec<(usize, R)>, MergeError>
    where
        R: Send + 'static,
        F: Future<Output = Result<R, MergeError>> + Send + 'static,
    {
        let expected = jobs.len();
        if expected == 0 {
            return Ok(Vec::new());
        }

        let (tx, mut rx) = mpsc::channel(expected);
        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(expected);

        for (index, job) in jobs.into_iter().enumerate() {
            let tx = tx.clone();
            let limiter = self.limiter.clone();
            handles.push(tokio::spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };
                let result = job.await;
                let _ = tx.send((index, result)).await;
            }));
        }

        drop(tx);

        let mut collected = Vec::with_capacity(expected);
        while let Some((index, result)) = rx.recv().await {
            match result {
                Ok(value) => collected.push((index, value)),
                Err(err) => {
                    warn!(
                        target: "page_merge::dispatch",
                        worker = index,
                        error = %err,
                        "Worker failed, aborting remaining workers"
                    );
                    for handle in &handles {
                        handle.abort();
                    }
                    return Err(err);
                }
            }
        }

        if collected.len() < expected {
            // A worker ended without reporting; surface its join error if any.
            for handle in handles {
                handle.await?;
            }
            return Err(MergeError::Incomplete {
                received: collected.len(),
                expected,
            });
        }

        debug!(
            target: "page_merge::dispatch",
            workers = expected,
            "All workers reported"
        );

        Ok(collected)
    }
}
