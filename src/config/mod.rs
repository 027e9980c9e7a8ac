mod document;
mod settings;

pub use document::ConfigDocument;
pub use settings::{
    MainSettings, CONFIG_SECTION_MAIN, DEFAULT_ITEM_LABEL_FORMAT, DEFAULT_URL_PATTERN,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (e.g. ~/.config/workitem-lookup/)
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("workitem-lookup")
}

/// Get the default config file path (e.g. ~/.config/workitem-lookup/workitem-lookup.ini)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("workitem-lookup.ini")
}

/// Load configuration from an INI file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///
/// # Errors
///
/// Returns an error if the config file does not exist or cannot be read.
/// Unparseable text is not an error; see [`ConfigDocument::warnings`].
pub fn load_config(path: Option<PathBuf>) -> Result<ConfigDocument> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        anyhow::bail!("Config file not found at {}", config_path.display());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    Ok(ConfigDocument::parse(&content))
}

/// Where the plugin reads its configuration from on every reload.
pub trait ConfigSource {
    fn load(&self) -> Result<ConfigDocument>;
}

/// Configuration stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new(get_config_path())
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<ConfigDocument> {
        load_config(Some(self.path.clone()))
    }
}

/// Configuration held in memory, for hosts that hand the plugin its
/// settings text directly.
#[derive(Debug, Clone, Default)]
pub struct InlineConfig {
    pub text: String,
}

impl InlineConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ConfigSource for InlineConfig {
    fn load(&self) -> Result<ConfigDocument> {
        Ok(ConfigDocument::parse(&self.text))
    }
}
