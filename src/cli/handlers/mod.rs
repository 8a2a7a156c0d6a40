mod export;
mod summary;

pub use export::handle_export;
pub use summary::handle_summary;

use crate::cli::Cli;
use crate::config::{ExportConfig, ExportSettings};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub cwd: PathBuf,
    pub settings: ExportSettings,
}

impl CommandContext {
    /// Loads config for the current directory and applies global CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, base) = ExportConfig::load(&cwd, cli.config.as_deref())
            .context("Failed to load ccmem-export configuration")?;

        let mut settings = config.export.resolve_paths(&base);
        if let Some(ref database) = cli.database {
            settings.database = cwd.join(database);
        }

        Ok(Self { cwd, settings })
    }
}
