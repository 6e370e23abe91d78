use crate::core::PantryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";
pub const HOME_ENV: &str = "PANTRY_HOME";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PantryConfig {
    pub repo_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_result_count")]
    pub result_count: u32,
}

fn default_api_base_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

fn default_result_count() -> u32 {
    12
}

// Default configuration if file is missing
impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            repo_url: "https://github.com/pantry-cli/pantry-recipes.git".to_string(),
            api_base_url: default_api_base_url(),
            api_key: None,
            result_count: default_result_count(),
        }
    }
}

impl PantryConfig {
    /// The environment variable wins over the stored key.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }
}

/// `$PANTRY_HOME`, or `~/.pantry`.
pub fn pantry_root() -> Result<PathBuf, PantryError> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir()
        .map(|home| home.join(".pantry"))
        .ok_or(PantryError::HomeDirUnavailable)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join("config.toml"),
        }
    }

    // Load config or create default if missing
    pub async fn load(&self) -> Result<PantryConfig, PantryError> {
        if !self.path.exists() {
            let default_config = PantryConfig::default();
            self.save(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path).await?;
        Ok(toml::from_str(&content)?)
    }

    pub async fn save(&self, config: &PantryConfig) -> Result<(), PantryError> {
        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, content).await?;
        Ok(())
    }
}
