//! # Core Application Logic
//!
//! This module contains firmdex's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • query (pure pipeline)│
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   Tests    │
//!     │  Adapter   │      │ (reqwest)  │      │ (canned    │
//!     │ (ratatui)  │      │            │      │  providers)│
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` — everything that can happen
//! - [`query`]: Pure filter/sort/facet/paginate functions over the records
//! - [`config`]: Layered TOML configuration

pub mod action;
pub mod config;
pub mod query;
pub mod state;
