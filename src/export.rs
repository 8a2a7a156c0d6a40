//! Store to snapshot to files.

use crate::{
    config::ExportSettings,
    error::{ExportError, Result},
    snapshot::Snapshot,
    storage::Store,
};
use chrono::Local;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct Exporter {
    settings: ExportSettings,
}

impl Exporter {
    pub fn new(settings: ExportSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Reads the whole store and builds a snapshot without writing anything.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let store = Store::open(&self.settings.database)?;
        tracing::info!(database = %store.path().display(), "Reading database");

        let stories = store.load_stories()?;
        let tasks = store.load_tasks()?;
        let defects = store.load_defects()?;
        let landmines = store.load_landmines()?;
        let metrics = store.metrics()?;

        Ok(Snapshot::build(
            stories,
            tasks,
            defects,
            landmines,
            metrics,
            Local::now(),
        ))
    }

    /// Builds a snapshot and writes both the JSON and the script file.
    ///
    /// Nothing on disk changes unless the whole snapshot was read and both
    /// files were fully staged.
    pub fn export(&self) -> Result<Snapshot> {
        let snapshot = self.snapshot()?;

        let json = render_json(&snapshot)?;
        let script = render_script(&snapshot, &self.settings.global_name)?;

        let staged_json = stage(&self.settings.json_output, &json)?;
        let staged_script = stage(&self.settings.script_output, &script)?;
        persist(staged_json, &self.settings.json_output)?;
        persist(staged_script, &self.settings.script_output)?;

        tracing::info!(
            json = %self.settings.json_output.display(),
            script = %self.settings.script_output.display(),
            summary = %snapshot.summary(),
            "Export complete"
        );
        Ok(snapshot)
    }
}

/// Pretty JSON with two-space indentation.
pub fn render_json(snapshot: &Snapshot) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshot.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ExportError::Write(e.to_string()))
}

/// The snapshot as a script assigning it to `global_name`, loadable from a
/// `<script>` tag without any fetch.
pub fn render_script(snapshot: &Snapshot, global_name: &str) -> Result<String> {
    Ok(format!("{} = {};", global_name, render_json(snapshot)?))
}

/// Writes `content` to a synced temp file next to `target`.
fn stage(target: &Path, content: &str) -> Result<NamedTempFile> {
    let target_dir = parent_dir(target);
    std::fs::create_dir_all(&target_dir)?;

    let mut temp_file = NamedTempFile::new_in(&target_dir)
        .map_err(|e| ExportError::Write(format!("Failed to create temp file: {}", e)))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| ExportError::Write(format!("Failed to write to temp file: {}", e)))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| ExportError::Write(format!("Failed to sync temp file: {}", e)))?;
    Ok(temp_file)
}

fn persist(temp_file: NamedTempFile, target: &Path) -> Result<()> {
    temp_file.persist(target).map_err(|e| {
        ExportError::Write(format!("Failed to persist {}: {}", target.display(), e))
    })?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
