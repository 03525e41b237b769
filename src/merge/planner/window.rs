/// Coordinates passed to one source's fetch callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalWindow {
    pub page: usize,
    pub page_size: usize,
    pub offset: usize,
    /// Padding rows to drop from the front of page 1.
    pub leading_skip: usize,
}

impl PhysicalWindow {
    /// Locates the physical page holding the row at `offset` within one source.
    ///
    /// In padding mode the page is widened by `offset % page_size` so that a
    /// page-addressed source still returns the row at `offset`; the widening
    /// is recorded as `leading_skip`.
    pub fn locate(offset: usize, page_size: usize, padding_mode: bool) -> Self {
        let page_size = page_size.max(1);
        let (leading_skip, physical_size) = if padding_mode {
            let rem = offset % page_size;
            (rem, rem + page_size)
        } else {
            (0, page_size)
        };

        Self {
            page: offset / physical_size + 1,
            page_size: physical_size,
            offset,
            leading_skip,
        }
    }

    /// Rows to discard from the returned slice. Only page 1 carries padding.
    pub fn skip(&self) -> usize {
        if self.page == 1 { self.leading_skip } else { 0 }
    }
}
