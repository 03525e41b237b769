use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use super::traits::{PageSource, SourcePage};
use crate::errors::BoxError;

/// How a source interprets the window it is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Addressing {
    /// Rows start at `(page - 1) * page_size`; `offset` is ignored.
    #[default]
    Page,
    /// Rows start at `offset`; `page` is ignored.
    Offset,
}

impl FromStr for Addressing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" => Ok(Addressing::Page),
            "offset" => Ok(Addressing::Offset),
            other => Err(format!("unknown addressing '{}', expected page or offset", other)),
        }
    }
}

impl fmt::Display for Addressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Addressing::Page => f.write_str("page"),
            Addressing::Offset => f.write_str("offset"),
        }
    }
}

/// In-memory source over a fixed row vector.
pub struct MemorySource<T> {
    name: String,
    rows: Vec<T>,
    addressing: Addressing,
    latency: Option<Duration>,
}

impl<T: Clone + Send + Sync + 'static> MemorySource<T> {
    pub fn new(name: impl Into<String>, rows: Vec<T>, addressing: Addressing) -> Self {
        Self {
            name: name.into(),
            rows,
            addressing,
            latency: None,
        }
    }

    /// Delays every fetch and count call, to simulate a slow backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn start_of(&self, page: usize, page_size: usize, offset: usize) -> usize {
        match self.addressing {
            Addressing::Page => page.saturating_sub(1).saturating_mul(page_size),
            Addressing::Offset => offset,
        }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> PageSource<T> for MemorySource<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(
        &self,
        page: usize,
        page_size: usize,
        offset: usize,
    ) -> Result<SourcePage<T>, BoxError> {
        self.simulate_latency().await;

        let total = self.rows.len();
        let start = self.start_of(page, page_size, offset);
        if start >= total {
            return Ok(SourcePage::empty(total));
        }
        let end = start.saturating_add(page_size).min(total);

        trace!(
            target: "page_merge::source",
            source = %self.name,
            addressing = %self.addressing,
            start,
            end,
            "Serving in-memory slice"
        );

        Ok(SourcePage::new(total, self.rows[start..end].to_vec()))
    }

    async fn count(&self) -> Result<usize, BoxError> {
        self.simulate_latency().await;
        Ok(self.rows.len())
    }
}
