//! # TUI Components
//!
//! All UI components for the terminal interface. Two patterns, following
//! the rest of the `tui` module:
//!
//! - **Stateless (props-based)**: `StatusBar`, `FilterBar` — receive all
//!   data as struct fields and just render it.
//! - **Stateful (event-driven)**: `SearchBox` (debounced keystroke buffer),
//!   `TableViewState`/`TableView` and `CardGridState`/`CardGrid`, which
//!   split persistent state from a transient per-frame render wrapper.
//!
//! Each component file is self-contained: state, events, rendering, and
//! tests live together.

pub mod card_grid;
pub mod filter_bar;
pub mod search_box;
pub mod status_bar;
pub mod table_view;

pub use card_grid::{CardGrid, CardGridState};
pub use filter_bar::FilterBar;
pub use search_box::{SearchBox, SearchEvent};
pub use status_bar::StatusBar;
pub use table_view::{TableView, TableViewState};
