use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Directory scanned for `.log` files (non-recursive).
    #[serde(default = "default_input_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Entry archive target: every parsed record, one JSON array.
    #[serde(default = "default_entry_archive")]
    pub entry_archive: PathBuf,
    /// Insights summary target: derived metrics, one JSON object.
    #[serde(default = "default_insights")]
    pub insights: PathBuf,
}

fn default_input_directory() -> PathBuf {
    PathBuf::from("tmp/logs")
}

fn default_entry_archive() -> PathBuf {
    PathBuf::from("static/processed_logs.json")
}

fn default_insights() -> PathBuf {
    PathBuf::from("static/insights.json")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: default_input_directory(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            entry_archive: default_entry_archive(),
            insights: default_insights(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests). Every key
    /// has a default, so the empty document is valid.
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.input.directory.as_os_str().is_empty(),
            "input.directory must be non-empty"
        );
        anyhow::ensure!(
            !self.output.entry_archive.as_os_str().is_empty(),
            "output.entry_archive must be non-empty"
        );
        anyhow::ensure!(
            !self.output.insights.as_os_str().is_empty(),
            "output.insights must be non-empty"
        );
        anyhow::ensure!(
            self.output.entry_archive != self.output.insights,
            "output.entry_archive and output.insights must be distinct paths"
        );
        Ok(())
    }
}
