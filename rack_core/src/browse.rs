use crate::query::{DistrictFilter, RackPage, RackQuery};
use crate::store::RackStore;

/// List-view state: search text, district facet and current page.
///
/// Any change to the text or the district puts the view back on page 1, so a
/// page number from an older filter is never applied to a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    query: RackQuery,
    page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            query: RackQuery::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &RackQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.page = 1;
    }

    pub fn set_district(&mut self, district: DistrictFilter) {
        self.query.district = district;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Evaluates the view and keeps the clamped page as the current one.
    pub fn view<'a>(&mut self, store: &'a RackStore) -> RackPage<'a> {
        let page = store.query(&self.query, self.page);
        self.page = page.pagination.page;
        page
    }
}
