use super::CatalogEntry;

/// Page size of the catalog list
pub const DEFAULT_ITEMS_PER_PAGE: usize = 15;

/// Which list behaviors are switched on for a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Entries per page, at least 1
    pub items_per_page: usize,
    /// When false, search terms are ignored and every entry is listed
    pub search_enabled: bool,
    /// When false, all filtered entries are shown on a single page
    pub pagination_enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_enabled: true,
            pagination_enabled: true,
        }
    }
}

impl CatalogConfig {
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn with_search(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.pagination_enabled = enabled;
        self
    }
}

/// Filtered, paginated view over a fetched catalog.
///
/// `filtered_entries` is rebuilt from `entries` and the search term on every change
/// to either. The current page starts at 1, is reset to 1 by a new search term, and
/// otherwise only moves through [`next_page`](Self::next_page) and
/// [`previous_page`](Self::previous_page), both of which saturate.
///
/// [`set_entries`](Self::set_entries) leaves the page alone, so a shorter catalog can
/// leave `current_page` past [`total_pages`](Self::total_pages) with nothing visible.
/// Callers step back with `previous_page` or apply a search term to return to page 1.
#[derive(Debug, Clone)]
pub struct CatalogView {
    config: CatalogConfig,
    entries: Vec<CatalogEntry>,
    search_term: String,
    current_page: usize,
    filtered: Vec<CatalogEntry>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl CatalogView {
    /// Create an empty view
    pub fn new(mut config: CatalogConfig) -> Self {
        config.items_per_page = config.items_per_page.max(1);
        Self {
            config,
            entries: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            filtered: Vec::new(),
        }
    }

    /// Create a view over an already fetched catalog
    pub fn with_entries(entries: Vec<CatalogEntry>, config: CatalogConfig) -> Self {
        let mut view = Self::new(config);
        view.set_entries(entries);
        view
    }

    /// Replace the catalog. The current page is kept.
    pub fn set_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = entries;
        self.refilter();
    }

    /// Apply a new search term and go back to the first page.
    ///
    /// Ignored when search is disabled.
    pub fn set_search_term(&mut self, term: &str) {
        if !self.config.search_enabled {
            return;
        }
        self.search_term = term.to_string();
        self.current_page = 1;
        self.refilter();
    }

    /// Advance one page. Returns false if already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page. Returns false if already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Entries on the current page
    pub fn visible_entries(&self) -> &[CatalogEntry] {
        if !self.config.pagination_enabled {
            return &self.filtered;
        }

        let per_page = self.config.items_per_page;
        let len = self.filtered.len();
        let start = ((self.current_page - 1) * per_page).min(len);
        let end = (self.current_page * per_page).min(len);
        &self.filtered[start..end]
    }

    /// `ceil(filtered / items_per_page)`, 0 when nothing matches
    pub fn total_pages(&self) -> usize {
        if !self.config.pagination_enabled {
            return usize::from(!self.filtered.is_empty());
        }
        self.filtered.len().div_ceil(self.config.items_per_page)
    }

    /// Whether the "previous" control is enabled
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled. False for an empty result set.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn filtered_entries(&self) -> &[CatalogEntry] {
        &self.filtered
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn refilter(&mut self) {
        let term = self.search_term.to_lowercase();
        self.filtered = if term.is_empty() {
            self.entries.clone()
        } else {
            self.entries
                .iter()
                .filter(|entry| entry.matches(&term))
                .cloned()
                .collect()
        };
    }
}
