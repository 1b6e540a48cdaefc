//! # Taskboard Shared Library
//!
//! This crate contains the data layer shared by the taskboard API server:
//! database models with their CRUD operations and the connection pool /
//! migration utilities.
//!
//! ## Module Organization
//!
//! - `models`: Database models (users, tasks, assignments)
//! - `db`: Connection pool and migration runner

pub mod db;
pub mod models;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
