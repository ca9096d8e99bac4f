pub mod client;
pub mod types;

pub use client::{DirectoryProvider, FetchError, HttpDirectoryProvider};
pub use types::Company;
