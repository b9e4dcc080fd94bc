// Filter and pagination state for the tag list

/// State behind the search box and the pager.
///
/// `raw_input` follows every keystroke; `committed_filter` only moves when
/// the user applies the filter (or the debounced variant commits after a
/// quiet period). Committing always resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    raw_input: String,
    committed_filter: String,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        FilterState {
            raw_input: String::new(),
            committed_filter: String::new(),
            page: 1,
        }
    }

    /// Restore state carried in the URL (committed filter and page).
    pub fn restore(filter: &str, page: u32) -> Self {
        FilterState {
            raw_input: filter.to_string(),
            committed_filter: filter.to_string(),
            page: page.max(1),
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.raw_input = input.into();
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Apply the typed filter. The page resets to 1 so the new result set
    /// starts from its first window.
    pub fn commit(&mut self) {
        self.committed_filter = self.raw_input.clone();
        self.page = 1;
    }

    pub fn committed_filter(&self) -> &str {
        &self.committed_filter
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}
