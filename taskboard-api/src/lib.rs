//! # Taskboard API Server Library
//!
//! This library provides the core functionality for the taskboard API
//! server: CRUD over users and tasks plus user-task assignment.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `validate`: Ordered request-field validation
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod validate;
