/// A logical page over the concatenation of every source.
///
/// Construction never fails: a zero page or page size is clamped to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
    padding_mode: bool,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            padding_mode: false,
        }
    }

    pub fn with_padding(mut self, padding_mode: bool) -> Self {
        self.padding_mode = padding_mode;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn padding_mode(&self) -> bool {
        self.padding_mode
    }

    /// Global index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Global index one past the last row on this page.
    pub fn end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
