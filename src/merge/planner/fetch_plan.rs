use super::window::PhysicalWindow;

/// A source's name and the row count it reported during the count phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedSource {
    pub name: String,
    pub count: usize,
}

impl CountedSource {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// What to fetch from one source to cover its part of the logical page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub source_index: usize,
    pub source_name: String,
    pub window: PhysicalWindow,
}

impl FetchPlan {
    pub fn physical_page(&self) -> usize {
        self.window.page
    }

    pub fn physical_page_size(&self) -> usize {
        self.window.page_size
    }

    pub fn physical_offset(&self) -> usize {
        self.window.offset
    }

    pub fn leading_skip(&self) -> usize {
        self.window.leading_skip
    }
}
