/// Database models for taskboard
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: user accounts
/// - `task`: tasks with completion status
/// - `assignment`: user-task assignment join rows
///
/// Ids for users and tasks are client-supplied strings, not generated
/// keys. User ids start with 'f' and task ids start with 't'; the prefix
/// is enforced by the API layer on deletion and assignment operations.

pub mod assignment;
pub mod task;
pub mod user;
