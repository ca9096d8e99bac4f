//! # Actions
//!
//! Everything that can happen in firmdex becomes an `Action`.
//! User types into the search box? That's `Action::SetSearch`.
//! The fetch task finishes? That's `Action::DataLoaded`.
//!
//! The `update()` function takes the current state and an action, applies
//! the transition, and refreshes the derived view before returning. No I/O
//! here — when a transition needs the outside world (spawning the fetch),
//! it returns an `Effect` and the TUI layer acts on it.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every transition is total: given a well-typed action it cannot fail.
//! The event loop drains actions one at a time, so the derived view the
//! next action sees is always consistent with the state.

use log::{debug, info};

use crate::api::Company;
use crate::core::state::{App, FetchStatus, Filters, SortKey};

#[derive(Debug)]
pub enum Action {
    /// Committed (debounced) search text from the search box.
    SetSearch(String),
    SetLocation(String),
    SetIndustry(String),
    SetSort(SortKey),
    ResetFilters,
    SetPage(usize),
    SetRowsPerPage(usize),
    /// Start (or restart) the fetch. Bumps the fetch sequence.
    Reload,
    /// Fetch completed. Ignored when `seq` is no longer current.
    DataLoaded { seq: u64, companies: Vec<Company> },
    /// Fetch failed. Ignored when `seq` is no longer current; the previous
    /// records are retained either way.
    FetchFailed { seq: u64, message: String },
    Quit,
}

/// What the event loop must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the async fetch task for the current `fetch_seq`.
    SpawnFetch,
    Quit,
}

/// The single synchronous reducer. Filter-affecting transitions reset the
/// page to 0 so a narrower result set can never leave the user stranded on
/// an out-of-range page; `SetPage` touches no filter field.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetSearch(text) => {
            app.filters.search = text;
            app.page = 0;
            app.refresh_processed();
            Effect::None
        }
        Action::SetLocation(value) => {
            app.filters.location = value;
            app.page = 0;
            app.refresh_processed();
            Effect::None
        }
        Action::SetIndustry(value) => {
            app.filters.industry = value;
            app.page = 0;
            app.refresh_processed();
            Effect::None
        }
        Action::SetSort(key) => {
            app.filters.sort_by = key;
            app.page = 0;
            app.refresh_processed();
            Effect::None
        }
        Action::ResetFilters => {
            app.filters = Filters::default();
            app.page = 0;
            app.refresh_processed();
            Effect::None
        }
        Action::SetPage(page) => {
            // The page slice is computed on read; an out-of-range page
            // degrades to an empty slice rather than an error.
            app.page = page;
            Effect::None
        }
        Action::SetRowsPerPage(rows) => {
            app.rows_per_page = rows;
            app.page = 0;
            Effect::None
        }
        Action::Reload => {
            app.fetch_seq += 1;
            app.status = FetchStatus::Loading;
            info!("Reload requested (seq {})", app.fetch_seq);
            Effect::SpawnFetch
        }
        Action::DataLoaded { seq, companies } => {
            if seq != app.fetch_seq {
                debug!(
                    "Discarding stale fetch result (seq {}, current {})",
                    seq, app.fetch_seq
                );
                return Effect::None;
            }
            info!("Directory loaded: {} records", companies.len());
            app.companies = companies;
            app.status = FetchStatus::Idle;
            app.refresh_facets();
            app.refresh_processed();
            Effect::None
        }
        Action::FetchFailed { seq, message } => {
            if seq != app.fetch_seq {
                debug!(
                    "Discarding stale fetch failure (seq {}, current {})",
                    seq, app.fetch_seq
                );
                return Effect::None;
            }
            // Records keep their last known value so an error after a
            // successful earlier load does not blank the view.
            app.status = FetchStatus::Error(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{ALL_FACET, FetchStatus};
    use crate::test_support::{loaded_app, sample_companies, test_app};

    fn names(list: &[Company]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_filter_changing_actions_reset_page() {
        let filter_actions: Vec<fn() -> Action> = vec![
            || Action::SetSearch("x".to_string()),
            || Action::SetLocation("NY".to_string()),
            || Action::SetIndustry("Tech".to_string()),
            || Action::SetSort(SortKey::FoundedDesc),
            || Action::ResetFilters,
            || Action::SetRowsPerPage(20),
        ];
        for make in filter_actions {
            let mut app = loaded_app();
            app.page = 3;
            update(&mut app, make());
            assert_eq!(app.page, 0, "page not reset by {:?}", make());
        }
    }

    #[test]
    fn test_set_page_does_not_touch_filters() {
        let mut app = loaded_app();
        update(&mut app, Action::SetLocation("NY".to_string()));
        let before = app.filters.clone();
        update(&mut app, Action::SetPage(2));
        assert_eq!(app.page, 2);
        assert_eq!(app.filters, before);
    }

    #[test]
    fn test_location_filter_scenario() {
        let mut app = test_app();
        update(
            &mut app,
            Action::DataLoaded {
                seq: 0,
                companies: sample_companies(),
            },
        );
        update(&mut app, Action::SetLocation("LA".to_string()));
        assert!(app.processed.iter().all(|c| c.location == "LA"));
        assert_eq!(app.locations[0], ALL_FACET);
        assert!(app.locations.contains(&"LA".to_string()));
    }

    #[test]
    fn test_sort_scenario_founded_desc() {
        let mut app = test_app();
        update(
            &mut app,
            Action::DataLoaded {
                seq: 0,
                companies: vec![
                    crate::test_support::company(1, "Acme", "Tech", "NY", 2001),
                    crate::test_support::company(2, "Beta", "Retail", "LA", 1999),
                ],
            },
        );
        update(&mut app, Action::SetSort(SortKey::FoundedDesc));
        assert_eq!(names(&app.processed), vec!["Acme", "Beta"]);
    }

    #[test]
    fn test_reset_filters_restores_defaults() {
        let mut app = loaded_app();
        update(&mut app, Action::SetSearch("acme".to_string()));
        update(&mut app, Action::SetIndustry("Tech".to_string()));
        update(&mut app, Action::ResetFilters);
        assert_eq!(app.filters, Filters::default());
        assert_eq!(app.processed.len(), app.companies.len());
    }

    #[test]
    fn test_reload_bumps_seq_and_requests_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Reload);
        assert_eq!(effect, Effect::SpawnFetch);
        assert_eq!(app.fetch_seq, 1);
        assert_eq!(app.status, FetchStatus::Loading);
    }

    #[test]
    fn test_fetch_failure_preserves_records() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::FetchFailed {
                seq: 1,
                message: "Network Error".to_string(),
            },
        );
        assert_eq!(app.status, FetchStatus::Error("Network Error".to_string()));
        assert!(app.companies.is_empty());
        assert!(app.processed.is_empty());

        // An error after a successful load keeps the loaded records.
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::DataLoaded {
                seq: 2,
                companies: sample_companies(),
            },
        );
        let loaded = app.companies.len();
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::FetchFailed {
                seq: 3,
                message: "Network Error".to_string(),
            },
        );
        assert_eq!(app.companies.len(), loaded);
        assert_eq!(app.processed.len(), loaded);
    }

    #[test]
    fn test_stale_fetch_results_are_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Reload); // seq 1
        update(&mut app, Action::Reload); // seq 2 supersedes it
        let effect = update(
            &mut app,
            Action::DataLoaded {
                seq: 1,
                companies: sample_companies(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(app.companies.is_empty());
        assert_eq!(app.status, FetchStatus::Loading);

        // Stale failures are ignored too.
        update(
            &mut app,
            Action::FetchFailed {
                seq: 1,
                message: "late".to_string(),
            },
        );
        assert_eq!(app.status, FetchStatus::Loading);
    }

    #[test]
    fn test_data_loaded_refreshes_facets_and_processed() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::DataLoaded {
                seq: 1,
                companies: sample_companies(),
            },
        );
        assert_eq!(app.status, FetchStatus::Idle);
        assert_eq!(app.locations[0], ALL_FACET);
        assert!(app.locations.len() > 1);
        assert_eq!(app.processed.len(), app.companies.len());
    }

    #[test]
    fn test_stale_facet_selection_matches_nothing() {
        let mut app = loaded_app();
        update(&mut app, Action::SetLocation("Atlantis".to_string()));
        assert!(app.processed.is_empty());
        assert!(app.page_slice().is_empty());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
