use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::{DataSource, GenerateMode, OptionCatalog, ALL_SITES};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content collections offered by the site selector
    #[serde(default)]
    pub sites: SitesConfig,

    /// Generate mode shown when a session starts with no prior selection
    #[serde(default)]
    pub default_mode: GenerateMode,

    /// Retrieval endpoints offered by the data-source selector
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: SitesConfig::default(),
            default_mode: GenerateMode::default(),
            retrieval: RetrievalConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

/// Allowed sites, first entry is the wildcard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesConfig {
    pub allowed: Vec<String>,
    /// Site shown when a session starts with no prior selection
    pub default_site: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            allowed: vec![
                ALL_SITES.to_string(),
                "seriouseats".to_string(),
                "hebbarskitchen".to_string(),
                "woksoflife".to_string(),
                "nytimes".to_string(),
                "imdb".to_string(),
            ],
            default_site: ALL_SITES.to_string(),
        }
    }
}

/// Retrieval endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Whether the data-source selector is offered at all
    pub enable_database_selector: bool,
    /// Endpoint forced as the active selection at panel construction
    pub default_endpoint: String,
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            enable_database_selector: true,
            default_endpoint: "qdrant_local".to_string(),
            endpoints: vec![
                EndpointConfig::new("qdrant_local", "Qdrant (local)"),
                EndpointConfig::new("azure_ai_search", "Azure AI Search"),
                EndpointConfig::new("milvus", "Milvus"),
                EndpointConfig::new("snowflake_cortex_search", "Snowflake Cortex Search"),
            ],
        }
    }
}

/// One retrieval endpoint descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub id: String,
    pub name: String,
}

impl EndpointConfig {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Color theme
    pub theme: String,
    /// Show the ask-line hint bar
    pub show_hints: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_hints: true,
        }
    }
}

impl Config {
    /// Build the static option catalog for this process
    pub fn catalog(&self) -> OptionCatalog {
        OptionCatalog::new(
            self.sites.allowed.clone(),
            self.retrieval
                .endpoints
                .iter()
                .map(|e| DataSource::new(e.id.as_str(), e.name.as_str()))
                .collect(),
            self.retrieval.default_endpoint.clone(),
        )
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(".coral/config.toml");

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // Environment variables (CORAL_ prefix)
    figment = figment.merge(Env::prefixed("CORAL_"));

    figment.extract().context("Failed to load configuration")
}

/// Load configuration from an explicit file, without the layered sources
pub fn load_config_file(path: &PathBuf) -> Result<Config> {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "coral") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("coral");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join("config.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        save_config(&default_config, Some(config_file.clone()))?;
        println!("Created default configuration at: {}", config_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_consistent_catalog() {
        let config = Config::default();
        let catalog = config.catalog();

        assert_eq!(catalog.sites(), config.sites.allowed.as_slice());
        assert_eq!(catalog.default_source_id(), "qdrant_local");
        assert_eq!(catalog.sources().len(), config.retrieval.endpoints.len());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.sites.default_site = "nytimes".to_string();
        config.retrieval.enable_database_selector = false;
        save_config(&config, Some(path.clone())).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.sites.default_site, "nytimes");
        assert!(!loaded.retrieval.enable_database_selector);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.ui.theme, "light");
        assert!(loaded.retrieval.enable_database_selector);
        assert!(!loaded.sites.allowed.is_empty());
    }
}
