/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `ping`: liveness probe
/// - `users`: user CRUD
/// - `tasks`: task CRUD, merge-patch update, joined listing
/// - `assignments`: user-task assignment
///
/// Every handler follows the same convention: validate input in order,
/// check existence/uniqueness preconditions against the store, mutate or
/// read, respond. The first failing check aborts the handler via `?`.

use serde::{Deserialize, Serialize};

pub mod assignments;
pub mod ping;
pub mod tasks;
pub mod users;

/// Plain message response, shared by handlers that return no record
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}
