use anyhow::Result;
use clap::Parser;

use ccmem_export::cli::handlers::{CommandContext, handle_export, handle_summary};
use ccmem_export::cli::{Cli, Commands};
use ccmem_export::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let ctx = CommandContext::load(&cli)?;

    match cli.command {
        Some(Commands::Export(args)) => handle_export(ctx, args),
        Some(Commands::Summary { json }) => handle_summary(ctx, json),
        None => handle_export(ctx, Default::default()),
    }
}
