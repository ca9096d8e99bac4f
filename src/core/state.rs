//! # Application State
//!
//! Core business state for firmdex. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn DirectoryProvider>  // data source
//! ├── companies: Vec<Company>    // raw fetched records
//! ├── status: FetchStatus        // idle / loading / error(message)
//! ├── filters: Filters           // search, location, industry, sort
//! ├── page: usize                // zero-based page
//! ├── rows_per_page: usize       // one of {10, 20, 50}
//! ├── fetch_seq: u64             // last-request-wins discipline
//! ├── locations: Vec<String>     // derived facet values ("All" first)
//! ├── industries: Vec<String>    // derived facet values ("All" first)
//! └── processed: Vec<Company>    // derived filtered+sorted list
//! ```
//!
//! The derived fields are memoized pure functions of the rest: facets depend
//! on `companies` only, `processed` on `companies` + `filters`. They are
//! refreshed by `update(state, action)` in action.rs exactly when one of
//! their inputs changes; the current page slice is computed on read and
//! never stored, so it cannot drift from `processed`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{Company, DirectoryProvider};
use crate::core::config::ResolvedConfig;
use crate::core::query;

/// Sentinel facet value matching every record.
pub const ALL_FACET: &str = "All";

/// The page sizes the UI offers.
pub const ROWS_PER_PAGE_CHOICES: &[usize] = &[10, 20, 50];

/// Fetch lifecycle of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error(String),
}

/// Which company field a sort key orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Founded,
}

/// The fixed sort enumeration offered by the UI.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    FoundedAsc,
    FoundedDesc,
}

impl SortKey {
    /// Cycles to the next sort key (wraps around).
    pub fn next(self) -> SortKey {
        match self {
            SortKey::NameAsc => SortKey::NameDesc,
            SortKey::NameDesc => SortKey::FoundedAsc,
            SortKey::FoundedAsc => SortKey::FoundedDesc,
            SortKey::FoundedDesc => SortKey::NameAsc,
        }
    }

    /// Returns a human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A → Z)",
            SortKey::NameDesc => "Name (Z → A)",
            SortKey::FoundedAsc => "Founded (Old → New)",
            SortKey::FoundedDesc => "Founded (New → Old)",
        }
    }

    pub fn field(self) -> SortField {
        match self {
            SortKey::NameAsc | SortKey::NameDesc => SortField::Name,
            SortKey::FoundedAsc | SortKey::FoundedDesc => SortField::Founded,
        }
    }

    pub fn descending(self) -> bool {
        matches!(self, SortKey::NameDesc | SortKey::FoundedDesc)
    }
}

/// User-selected query parameters. `location`/`industry` hold either
/// `"All"` or a facet value; a value that disappears after a reload is
/// tolerated and simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub search: String,
    pub location: String,
    pub industry: String,
    pub sort_by: SortKey,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: ALL_FACET.to_string(),
            industry: ALL_FACET.to_string(),
            sort_by: SortKey::default(),
        }
    }
}

pub struct App {
    pub provider: Arc<dyn DirectoryProvider>,
    pub companies: Vec<Company>,
    pub status: FetchStatus,
    pub filters: Filters,
    pub page: usize,
    pub rows_per_page: usize,
    /// Sequence number of the most recent fetch. Completion actions carry
    /// the seq they were spawned with; anything older is discarded.
    pub fetch_seq: u64,
    /// Derived: distinct locations, `"All"` first. Refreshed on data load.
    pub locations: Vec<String>,
    /// Derived: distinct industries, `"All"` first. Refreshed on data load.
    pub industries: Vec<String>,
    /// Derived: filtered + sorted full list. Refreshed on data or filter change.
    pub processed: Vec<Company>,
}

impl App {
    pub fn new(provider: Arc<dyn DirectoryProvider>, rows_per_page: usize) -> Self {
        let mut app = Self {
            provider,
            companies: Vec::new(),
            status: FetchStatus::Idle,
            filters: Filters::default(),
            page: 0,
            rows_per_page,
            fetch_seq: 0,
            locations: Vec::new(),
            industries: Vec::new(),
            processed: Vec::new(),
        };
        app.refresh_facets();
        app.refresh_processed();
        app
    }

    pub fn from_config(provider: Arc<dyn DirectoryProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider, config.rows_per_page);
        app.filters.sort_by = config.default_sort;
        app.refresh_processed();
        app
    }

    /// The slice of `processed` for the current page, clamped to bounds.
    /// Computed on read — never stored.
    pub fn page_slice(&self) -> &[Company] {
        query::paginate(&self.processed, self.page, self.rows_per_page)
    }

    /// Number of pages the current `processed` list spans (0 when empty).
    pub fn page_count(&self) -> usize {
        self.processed.len().div_ceil(self.rows_per_page)
    }

    pub(crate) fn refresh_facets(&mut self) {
        let (locations, industries) = query::derive_facets(&self.companies);
        self.locations = locations;
        self.industries = industries;
    }

    pub(crate) fn refresh_processed(&mut self) {
        self.processed = query::apply(&self.companies, &self.filters);
    }
}
