//! docconf — settings loader for documentation projects (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod output;
pub mod schema;
