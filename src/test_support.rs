//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Company, DirectoryProvider, FetchError};
use crate::core::state::App;

/// A provider serving a canned record set, for tests that don't need HTTP.
pub struct StaticProvider {
    pub companies: Vec<Company>,
}

#[async_trait]
impl DirectoryProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        Ok(self.companies.clone())
    }
}

/// A provider that always fails, for error-path tests.
pub struct FailingProvider {
    pub message: String,
}

#[async_trait]
impl DirectoryProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        Err(FetchError::Network(self.message.clone()))
    }
}

/// Builds a record with the fields the pipeline cares about.
pub fn company(id: u64, name: &str, industry: &str, location: &str, founded: i32) -> Company {
    Company {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        employees: 10,
        founded,
        description: None,
        website: None,
    }
}

/// A small but varied record set: duplicate facets, shared founding years,
/// mixed-case names, optional fields both present and absent.
pub fn sample_companies() -> Vec<Company> {
    vec![
        company(1, "Acme", "Tech", "NY", 2001),
        company(2, "Beta", "Retail", "LA", 1999),
        Company {
            description: Some("Cloud archival storage".to_string()),
            website: Some("https://coldvault.example".to_string()),
            ..company(3, "ColdVault", "Tech", "NY", 2012)
        },
        company(4, "delta freight", "Logistics", "Chicago", 1999),
        Company {
            website: Some("https://ember.example".to_string()),
            ..company(5, "Ember", "Retail", "LA", 2012)
        },
    ]
}

/// Creates a test App with an empty StaticProvider.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticProvider {
            companies: Vec::new(),
        }),
        10,
    )
}

/// Creates a test App with `sample_companies` already loaded, as if a fetch
/// had completed.
pub fn loaded_app() -> App {
    let mut app = test_app();
    app.companies = sample_companies();
    app.refresh_facets();
    app.refresh_processed();
    app
}
