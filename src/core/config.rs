//! # Configuration
//!
//! The guide's content and wrap width come from an optional TOML file:
//! defaults → guide file → `--config` flag.
//!
//! The file lives at `~/.nutriguide/guide.toml`. If it is missing the
//! built-in table is used; nothing is generated on disk.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::format::DEFAULT_WRAP_WIDTH;
use crate::core::table::{Entry, NutritionTable, TableError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// `None` keeps the built-in table; `Some(vec![])` is an empty guide.
    pub entries: Option<Vec<EntryConfig>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub wrap_width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    pub name: String,
    pub description: String,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub table: NutritionTable,
    pub wrap_width: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidWidth(usize),
    Table(TableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidWidth(w) => write!(f, "wrap_width must be at least 1, got {w}"),
            ConfigError::Table(e) => write!(f, "invalid guide entry: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TableError> for ConfigError {
    fn from(e: TableError) -> Self {
        ConfigError::Table(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.nutriguide`, where the guide file and log live.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nutriguide"))
}

/// Returns the path to `~/.nutriguide/guide.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("guide.toml"))
}

/// Load the guide file.
///
/// An explicit path must exist. The default path is optional: if it is
/// missing (or there is no home directory) the default config is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<GuideConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using built-in guide");
            return Ok(GuideConfig::default());
        }
    };

    if !path.exists() {
        info!("No guide file at {}, using built-in guide", path.display());
        return Ok(GuideConfig::default());
    }

    load_from(&path)
}

fn load_from(path: &Path) -> Result<GuideConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GuideConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded guide file from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the sparse file config into a validated table and width.
pub fn resolve(config: &GuideConfig) -> Result<ResolvedConfig, ConfigError> {
    let wrap_width = config.general.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH);
    if wrap_width == 0 {
        return Err(ConfigError::InvalidWidth(wrap_width));
    }

    let table = match &config.entries {
        Some(entries) => NutritionTable::new(
            entries
                .iter()
                .map(|e| Entry::new(e.name.clone(), e.description.clone()))
                .collect(),
        )?,
        None => NutritionTable::builtin(),
    };
    debug!("Resolved guide with {} entries at width {}", table.len(), wrap_width);

    Ok(ResolvedConfig { table, wrap_width })
}
