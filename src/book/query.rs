use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::domain::Contact;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// Search term and page selection. Presentation only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    search_term: String,
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Absolute jump. No upper bound: a page past the end just shows nothing.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get())
    }

    /// The current page window of the unfiltered collection.
    pub fn window<'a>(&self, contacts: &'a [Contact]) -> &'a [Contact] {
        let Some(first_index) = self.current_page.checked_sub(1) else {
            return &[];
        };
        let size = self.page_size.get();
        let start = first_index.saturating_mul(size).min(contacts.len());
        let end = start.saturating_add(size).min(contacts.len());
        &contacts[start..end]
    }

    /// Paginate first, then filter inside the window. A match on another
    /// page stays hidden until that page is selected.
    pub fn visible<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        let needle = self.search_term.to_lowercase();
        self.window(contacts)
            .iter()
            .filter(|contact| contact.matches(&needle))
            .collect()
    }
}
