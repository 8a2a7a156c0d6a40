use crate::export::Exporter;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_summary(ctx: CommandContext, json: bool) -> Result<()> {
    let exporter = Exporter::new(ctx.settings)?;
    let snapshot = exporter.snapshot()?;
    let metrics = &snapshot.metrics;

    if json {
        println!("{}", serde_json::to_string_pretty(metrics)?);
        return Ok(());
    }

    println!("{} {}", "Summary:".bold(), snapshot.summary());
    println!(
        "Tasks:    {} pending, {} in progress, {} completed",
        metrics.pending_tasks.to_string().white(),
        metrics.in_progress_tasks.to_string().yellow(),
        metrics.completed_tasks.to_string().green()
    );
    println!("Defects:  {} open", metrics.open_defects.to_string().red());
    Ok(())
}
