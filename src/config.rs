use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".ccmem-export.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// SQLite database written by CCMem
    #[serde(default = "default_database")]
    pub database: PathBuf,

    #[serde(default = "default_json_output")]
    pub json_output: PathBuf,

    #[serde(default = "default_script_output")]
    pub script_output: PathBuf,

    /// JavaScript expression the script file assigns the snapshot to
    #[serde(default = "default_global_name")]
    pub global_name: String,
}

fn default_database() -> PathBuf {
    PathBuf::from("ccmem.db")
}

fn default_json_output() -> PathBuf {
    PathBuf::from("ccmem-data.json")
}

fn default_script_output() -> PathBuf {
    PathBuf::from("ccmem-data.js")
}

fn default_global_name() -> String {
    "window.ccmemData".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            database: default_database(),
            json_output: default_json_output(),
            script_output: default_script_output(),
            global_name: default_global_name(),
        }
    }
}

impl ExportSettings {
    /// Makes every relative path absolute against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for path in [
            &mut self.database,
            &mut self.json_output,
            &mut self.script_output,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_global_name(&self.global_name)
    }
}

impl ExportConfig {
    /// Loads configuration for a run started in `cwd`.
    ///
    /// An explicit `config_path` must exist. Without one, the nearest
    /// `.ccmem-export.yml` at or above `cwd` is used, falling back to defaults.
    /// Returns the config together with the directory relative paths resolve
    /// against.
    pub fn load(cwd: &Path, config_path: Option<&Path>) -> Result<(Self, PathBuf)> {
        let found = match config_path {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ExportError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => Self::find_config_file(cwd),
        };

        let Some(path) = found else {
            return Ok((Self::default(), cwd.to_path_buf()));
        };

        tracing::debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(&path)?;
        let config: ExportConfig = serde_yaml::from_str(&content)?;
        let base = path
            .parent()
            .ok_or_else(|| ExportError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, base))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

/// Accepts dotted JavaScript identifier paths such as `window.ccmemData`.
fn validate_global_name(name: &str) -> Result<()> {
    let valid_segment = |segment: &str| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            }
            _ => false,
        }
    };

    if name.split('.').all(valid_segment) {
        Ok(())
    } else {
        Err(ExportError::Config(format!(
            "Invalid global name '{}': expected a JavaScript identifier path like window.ccmemData",
            name
        )))
    }
}
