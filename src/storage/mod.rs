//! Read-only access to the CCMem SQLite database.
//!
//! The producer owns the schema; the exporter only reads these tables:
//!
//! ```sql
//! story     (id, message, timestamp)
//! task      (id, story_id, description, status, timestamp)
//! defect    (id, story_id, task_id, description, status, timestamp)
//! landmines (id, task_id, session_id, error_context, attempted_fixes, timestamp)
//! ```
//!
//! Every reference is resolved with a `LEFT JOIN`, so dangling ids show up as
//! `null` denormalized fields rather than dropped rows.

mod store;

pub use store::Store;
