//! Data models for the export.
//!
//! This module defines the records read from the store and the aggregates
//! computed over them:
//!
//! - [`Story`], [`Task`], [`Defect`], [`Landmine`]: one typed record per table
//! - [`TaskStatus`], [`DefectStatus`]: stored workflow states
//! - [`StoryStatus`], [`TaskCounts`]: fields derived per story
//! - [`Metrics`]: store-wide counts

mod metrics;
mod records;
mod types;

pub use metrics::Metrics;
pub use records::{Defect, Landmine, Story, Task, TaskCounts};
pub use types::{DefectStatus, StoryStatus, TaskStatus};
