use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "rref_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RrefConfig {
    pub max_rows: usize,
    pub max_cols: usize,
    /// Character budget per rendered cell; wider fractions fall back to decimals
    pub cell_width: usize,
    pub show_pivots: bool,
}

impl Default for RrefConfig {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_cols: 10,
            cell_width: 8,
            show_pivots: true,
        }
    }
}

impl RrefConfig {
    /// Load from `path`, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    "error parsing config file: {e}. Using defaults."
                ),
            },
            Err(e) => tracing::warn!(
                path = %path.display(),
                "error reading config file: {e}. Using defaults."
            ),
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject shapes outside `1..=max_rows` x `1..=max_cols`.
    pub fn check_dimensions(&self, rows: usize, cols: usize) -> anyhow::Result<()> {
        if rows < 1 || rows > self.max_rows || cols < 1 || cols > self.max_cols {
            anyhow::bail!(
                "matrix is {rows}x{cols}; rows must be 1-{} and columns 1-{}",
                self.max_rows,
                self.max_cols
            );
        }
        Ok(())
    }
}
