use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Wildcard site value meaning "search every collection"
pub const ALL_SITES: &str = "all";

/// The three generate modes controlling downstream response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateMode {
    /// Return a ranked list of matching items
    List,
    /// Summarize the top results into a short answer
    Summarize,
    /// Generate a full answer grounded in the results
    Generate,
}

impl Default for GenerateMode {
    fn default() -> Self {
        Self::List
    }
}

impl GenerateMode {
    /// All modes, in the order they appear in the mode selector
    pub fn all() -> [Self; 3] {
        [Self::List, Self::Summarize, Self::Generate]
    }

    /// Get the display name for the mode
    pub fn display_name(&self) -> &str {
        match self {
            Self::List => "List",
            Self::Summarize => "Summarize",
            Self::Generate => "Generate",
        }
    }

    /// Convert mode to string (for config files and the wire value)
    pub fn as_str(&self) -> &str {
        match self {
            Self::List => "list",
            Self::Summarize => "summarize",
            Self::Generate => "generate",
        }
    }

    /// Parse mode from string (for config files)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "list" => Some(Self::List),
            "summarize" => Some(Self::Summarize),
            "generate" => Some(Self::Generate),
            _ => None,
        }
    }
}

/// Descriptor for a backing retrieval endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// Endpoint identifier, used as the control value
    pub id: String,
    /// Human-readable name, used as the display label
    pub name: String,
}

impl DataSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Static option sets used to populate the selector panel.
///
/// Values are fixed at construction time; the panel never re-fetches them.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    sites: Vec<String>,
    modes: Vec<GenerateMode>,
    sources: Vec<DataSource>,
    default_source_id: String,
}

/// Process-wide default catalog, matching the reference deployment
static DEFAULT_CATALOG: Lazy<OptionCatalog> = Lazy::new(|| {
    OptionCatalog::new(
        vec![
            ALL_SITES.to_string(),
            "seriouseats".to_string(),
            "hebbarskitchen".to_string(),
            "woksoflife".to_string(),
            "nytimes".to_string(),
            "imdb".to_string(),
        ],
        vec![
            DataSource::new("qdrant_local", "Qdrant (local)"),
            DataSource::new("azure_ai_search", "Azure AI Search"),
            DataSource::new("milvus", "Milvus"),
            DataSource::new("snowflake_cortex_search", "Snowflake Cortex Search"),
        ],
        "qdrant_local",
    )
});

impl OptionCatalog {
    /// Build a catalog from explicit option sets.
    ///
    /// If `default_source_id` names no descriptor, the first descriptor
    /// becomes the default.
    pub fn new(
        sites: Vec<String>,
        sources: Vec<DataSource>,
        default_source_id: impl Into<String>,
    ) -> Self {
        let default_source_id = default_source_id.into();
        let default_source_id = if sources.iter().any(|s| s.id == default_source_id) {
            default_source_id
        } else {
            sources.first().map(|s| s.id.clone()).unwrap_or_default()
        };

        Self {
            sites,
            modes: GenerateMode::all().to_vec(),
            sources,
            default_source_id,
        }
    }

    /// The process-wide default catalog
    pub fn default_catalog() -> &'static OptionCatalog {
        &DEFAULT_CATALOG
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn modes(&self) -> &[GenerateMode] {
        &self.modes
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    /// The fixed default data-source descriptor
    pub fn default_source(&self) -> Option<&DataSource> {
        self.sources.iter().find(|s| s.id == self.default_source_id)
    }

    pub fn default_source_id(&self) -> &str {
        &self.default_source_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in GenerateMode::all() {
            assert_eq!(GenerateMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(GenerateMode::parse("none"), None);
        assert_eq!(GenerateMode::parse("SUMMARIZE"), Some(GenerateMode::Summarize));
    }

    #[test]
    fn test_default_catalog_has_wildcard_site() {
        let catalog = OptionCatalog::default_catalog();
        assert!(catalog.sites().iter().any(|s| s == ALL_SITES));
        assert_eq!(catalog.modes().len(), 3);
    }

    #[test]
    fn test_default_source_resolves() {
        let catalog = OptionCatalog::default_catalog();
        let default = catalog.default_source().unwrap();
        assert_eq!(default.id, catalog.default_source_id());
    }

    #[test]
    fn test_unknown_default_falls_back_to_first_source() {
        let catalog = OptionCatalog::new(
            vec![ALL_SITES.to_string()],
            vec![
                DataSource::new("a", "A"),
                DataSource::new("b", "B"),
            ],
            "missing",
        );
        assert_eq!(catalog.default_source_id(), "a");
    }
}
