//! # ccmem-export - dashboard snapshots of a CCMem database
//!
//! CCMem tracks stories, tasks, defects and landmines in a SQLite database.
//! This crate reads that database and writes a denormalized JSON snapshot, plus
//! the same snapshot wrapped in a script so a static dashboard page can load it
//! with a `<script>` tag.
//!
//! ## Quick Start
//!
//! ```bash
//! # Export ./ccmem.db to ./ccmem-data.json and ./ccmem-data.js
//! ccmem-export
//!
//! # Custom locations
//! ccmem-export --database work/ccmem.db export --json-output public/data.json
//!
//! # Just print the counts
//! ccmem-export summary
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and defaults
//! - [`error`]: Error types and result aliases
//! - [`export`]: The exporter and output rendering
//! - [`model`]: Typed records and aggregates
//! - [`snapshot`]: Per-story derivation and the exported document
//! - [`storage`]: Read-only SQLite access

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.ccmem-export.yml` files and their defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ExportError` enum and `Result<T>` type alias.
pub mod error;

pub mod export;
pub mod logging;

/// Data models for the export.
pub mod model;

pub mod snapshot;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{ExportError, Result};
pub use export::{Exporter, render_json, render_script};
pub use snapshot::Snapshot;
