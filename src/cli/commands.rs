use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ccmem-export")]
#[command(
    author,
    version,
    about = "Export a CCMem work-tracking database to JSON for dashboards"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the CCMem database (overrides config)
    #[arg(long, global = true, env = "CCMEM_DB")]
    pub database: Option<PathBuf>,

    /// Path to config file (searches upward for .ccmem-export.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the database to a JSON file and a script file (default)
    Export(ExportArgs),

    /// Print store metrics without writing any files
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
pub struct ExportArgs {
    /// Where to write the JSON snapshot
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Where to write the script-wrapped snapshot
    #[arg(long)]
    pub script_output: Option<PathBuf>,

    /// Global the script file assigns the snapshot to
    #[arg(long)]
    pub global_name: Option<String>,

    /// Don't print the success message
    #[arg(short, long)]
    pub quiet: bool,
}
