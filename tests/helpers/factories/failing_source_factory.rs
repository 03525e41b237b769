use std::sync::Arc;

use crate::errors::BoxError;
use crate::source::{FnSource, SharedSource, SourcePage};

/// Builds sources that fail on fetch, on count, or both.
pub struct FailingSourceFactory {
    name: String,
    count: usize,
    fail_fetch: bool,
    fail_count: bool,
}

impl FailingSourceFactory {
    pub fn new() -> Self {
        Self {
            name: "broken".into(),
            count: 5,
            fail_fetch: true,
            fail_count: false,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self.fail_fetch = false;
        self
    }

    pub fn shared(self) -> SharedSource<String> {
        let count = self.count;
        let fail_fetch = self.fail_fetch;
        let fail_count = self.fail_count;
        let fetch_name = self.name.clone();
        let count_name = self.name.clone();

        Arc::new(FnSource::new(
            self.name,
            move |_, _, _| {
                let name = fetch_name.clone();
                async move {
                    if fail_fetch {
                        Err::<SourcePage<String>, BoxError>(format!("{} fetch refused", name).into())
                    } else {
                        Ok(SourcePage::empty(count))
                    }
                }
            },
            move || {
                let name = count_name.clone();
                async move {
                    if fail_count {
                        Err::<usize, BoxError>(format!("{} count refused", name).into())
                    } else {
                        Ok(count)
                    }
                }
            },
        ))
    }
}
