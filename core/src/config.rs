//! Loading and saving configuration
//!
//! Two kinds of files are read: the aura tree the editor saves, and catalog
//! files describing abilities and statuses. Both are TOML. Engine settings
//! are small and live in the platform config directory through confy.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use auralyte_types::{AuraConfig, Node};

use crate::game_data::{CatalogConfig, GameCatalog};
use crate::tree::reindex_in_place;

/// confy application name
const APP_NAME: &str = "auralyte";
const AURAS_FILE: &str = "auras.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("settings error: {0}")]
    Settings(#[from] confy::ConfyError),
}

/// Settings that apply to the whole engine rather than a single aura
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Game interfaces that hide every aura while visible
    pub blocking_interfaces: Vec<String>,
    /// Draw nothing when there is no local player
    pub require_player: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            blocking_interfaces: vec![
                "AreaMap".to_string(),
                "ContentsFinder".to_string(),
                "JournalDetail".to_string(),
            ],
            require_player: true,
        }
    }
}

impl EngineSettings {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load engine settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write to the platform config directory
    pub fn store(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    /// Load from an explicit file, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    pub fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self)?;
        Ok(())
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse an aura tree from TOML text
pub fn parse_auras(contents: &str, path: &Path) -> Result<AuraConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the aura tree from a file
pub fn load_auras(path: &Path) -> Result<AuraConfig, ConfigError> {
    let contents = read(path)?;
    let config = parse_auras(&contents, path)?;
    tracing::info!(path = %path.display(), nodes = config.nodes.len(), "Loaded auras");
    Ok(config)
}

/// Reindex and save the aura tree
pub fn save_auras(path: &Path, nodes: &mut [Node]) -> Result<(), ConfigError> {
    reindex_in_place(nodes);

    let config = AuraConfig { nodes: nodes.to_vec() };
    let contents = toml::to_string_pretty(&config).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), nodes = nodes.len(), "Saved auras");
    Ok(())
}

/// Load a catalog file
pub fn load_catalog(path: &Path) -> Result<GameCatalog, ConfigError> {
    let contents = read(path)?;
    let config: CatalogConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = GameCatalog::from_config(config);
    tracing::info!(
        path = %path.display(),
        abilities = catalog.ability_count(),
        statuses = catalog.status_count(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// `<config dir>/auralyte`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME))
}

/// `<config dir>/auralyte/auras.toml`
pub fn default_auras_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join(AURAS_FILE))
}

#[cfg(test)]
mod tests {
    use auralyte_types::{Attribute, AttributeBundle, Vec2};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("auralyte-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn save_reindexes_and_round_trips() {
        let path = temp_path("auras.toml");
        let mut nodes = vec![
            Node::indicator(
                "a",
                Vec2::new(1.0, 2.0),
                vec![AttributeBundle::new(vec![Attribute::Size { pixels: 40 }])],
            ),
            Node::group("g", Vec2::ZERO, vec![Node::indicator("b", Vec2::ZERO, vec![])]),
        ];

        save_auras(&path, &mut nodes).unwrap();
        assert_eq!(nodes[1].id, 2);
        assert_eq!(nodes[0].bundles[0].id, 1);

        let loaded = load_auras(&path).unwrap();
        assert_eq!(loaded.nodes, nodes);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_auras(Path::new("/nonexistent/auralyte/auras.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = parse_auras("[[nodes]\nname = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_catalog_file() {
        let path = temp_path("catalog.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            concat!(
                "[[ability]]\nid = 7561\nname = \"Swiftcast\"\nicon = 2606\n\n",
                "[[status]]\nid = 50\nname = \"Sprint\"\n",
            ),
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.ability(7561).map(|a| a.icon), Some(2606));
        assert!(catalog.status(50).is_some());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn settings_fill_missing_fields() {
        let settings: EngineSettings = toml::from_str("require_player = false").unwrap();
        assert!(!settings.require_player);
        assert_eq!(settings.blocking_interfaces, EngineSettings::default().blocking_interfaces);
    }

    #[test]
    fn settings_store_and_reload() {
        let path = temp_path("settings.toml");
        let settings = EngineSettings {
            blocking_interfaces: vec!["Talk".to_string()],
            require_player: false,
        };
        settings.store_to(&path).unwrap();
        assert_eq!(EngineSettings::load_from(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_settings_file_gets_defaults() {
        let path = temp_path("fresh-settings.toml");
        let _ = fs::remove_file(&path);
        assert_eq!(EngineSettings::load_from(&path).unwrap(), EngineSettings::default());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn default_paths_end_in_app_dir() {
        if let Some(path) = default_auras_path() {
            assert!(path.ends_with("auralyte/auras.toml"));
        }
    }
}
