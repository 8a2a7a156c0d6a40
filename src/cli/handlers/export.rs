use crate::cli::ExportArgs;
use crate::export::Exporter;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_export(ctx: CommandContext, args: ExportArgs) -> Result<()> {
    let mut settings = ctx.settings;
    if let Some(path) = args.json_output {
        settings.json_output = ctx.cwd.join(path);
    }
    if let Some(path) = args.script_output {
        settings.script_output = ctx.cwd.join(path);
    }
    if let Some(name) = args.global_name {
        settings.global_name = name;
    }

    let exporter = Exporter::new(settings)?;
    let snapshot = exporter.export()?;

    if !args.quiet {
        let settings = exporter.settings();
        println!(
            "{} {} to {} and {}",
            "Exported".green(),
            settings.database.display(),
            settings.json_output.display().to_string().cyan(),
            settings.script_output.display().to_string().cyan()
        );
        println!("{} {}", "Summary:".bold(), snapshot.summary());
    }
    Ok(())
}
