use serde::Serialize;

use super::request::PageRequest;

/// A row tagged with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult<T> {
    pub source_name: String,
    pub payload: T,
}

impl<T> RowResult<T> {
    pub fn new(source_name: impl Into<String>, payload: T) -> Self {
        Self {
            source_name: source_name.into(),
            payload,
        }
    }
}

/// The assembled page plus the total row count across all sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeOutcome<T> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub rows: Vec<RowResult<T>>,
}

impl<T> MergeOutcome<T> {
    pub fn new(request: &PageRequest, total: usize, rows: Vec<RowResult<T>>) -> Self {
        Self {
            page: request.page(),
            page_size: request.page_size(),
            total,
            rows,
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to show `total` rows.
    pub fn pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.payload)
    }

    pub fn into_payloads(self) -> Vec<T> {
        self.rows.into_iter().map(|row| row.payload).collect()
    }
}
