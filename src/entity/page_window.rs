/// Index window over an ordered activity list for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_pages: usize,
}

impl PageWindow {
    /// Whether pagination controls should be shown at all
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}
