use std::sync::Arc;
use std::time::Duration;

use crate::source::{Addressing, MemorySource, SharedSource};

/// Builds in-memory sources whose rows are `"{name}:{n}"` for n in 1..=len.
pub struct MemorySourceFactory {
    name: String,
    len: usize,
    addressing: Addressing,
    latency: Option<Duration>,
}

impl MemorySourceFactory {
    pub fn new() -> Self {
        Self {
            name: "a".into(),
            len: 9,
            addressing: Addressing::Page,
            latency: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_addressing(mut self, addressing: Addressing) -> Self {
        self.addressing = addressing;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn rows(&self) -> Vec<String> {
        (1..=self.len).map(|n| format!("{}:{}", self.name, n)).collect()
    }

    pub fn create(self) -> MemorySource<String> {
        let source = MemorySource::new(self.name.clone(), self.rows(), self.addressing);
        match self.latency {
            Some(latency) => source.with_latency(latency),
            None => source,
        }
    }

    pub fn shared(self) -> SharedSource<String> {
        Arc::new(self.create())
    }
}
