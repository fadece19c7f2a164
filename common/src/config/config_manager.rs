use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Result of a lenient load: the config to run with, plus what went wrong if
/// the stored one had to be ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedConfig<TConfig> {
    Stored(TConfig),
    Missing(TConfig),
    Rejected { config: TConfig, error: String },
}

impl<TConfig> LoadedConfig<TConfig> {
    pub fn into_config(self) -> TConfig {
        match self {
            LoadedConfig::Stored(config) => config,
            LoadedConfig::Missing(config) => config,
            LoadedConfig::Rejected { config, .. } => config,
        }
    }
}

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn location(&self) -> String {
        self.config_content_provider.location()
    }

    /// Missing content yields the default config; unreadable or invalid
    /// content is an error.
    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        match self.read_stored()? {
            Some(config) => Ok(config),
            None => Ok(TConfig::default()),
        }
    }

    /// Never fails: falls back to the default config and reports why.
    pub fn load_or_default(&self) -> LoadedConfig<TConfig> {
        if let Some(config) = self.config.borrow().as_ref() {
            return LoadedConfig::Stored(config.clone());
        }

        match self.read_stored() {
            Ok(Some(config)) => LoadedConfig::Stored(config),
            Ok(None) => LoadedConfig::Missing(TConfig::default()),
            Err(error) => LoadedConfig::Rejected {
                config: TConfig::default(),
                error,
            },
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }

    fn read_stored(&self) -> Result<Option<TConfig>, String> {
        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.config_serializer.deserialize(&config_data)?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        size: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                size: 3,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            crate::config::check_range("size", self.size, 1, 10)
        }
    }

    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: Cell<u32>,
    }

    impl MemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
                reads: Cell::new(0),
            }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryProvider, SampleConfig> {
        ConfigManager::new(MemoryProvider::new(content), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager(None);
        assert_eq!(manager.get_config(), Ok(SampleConfig::default()));
        assert_eq!(
            manager.load_or_default(),
            LoadedConfig::Missing(SampleConfig::default())
        );
    }

    #[test]
    fn test_stored_config_is_cached() {
        let manager = manager(Some("name: board\nsize: 5\n"));
        let expected = SampleConfig {
            name: "board".to_string(),
            size: 5,
        };
        assert_eq!(manager.get_config(), Ok(expected.clone()));
        assert_eq!(manager.get_config(), Ok(expected));
        assert_eq!(manager.config_content_provider.reads.get(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = manager(Some("name: board\nsize: 50\n"));
        assert!(manager.get_config().is_err());

        match manager.load_or_default() {
            LoadedConfig::Rejected { config, error } => {
                assert_eq!(config, SampleConfig::default());
                assert!(error.contains("size"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = manager(Some("size: [not a number"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_validates_and_persists() {
        let manager = manager(None);
        let bad = SampleConfig {
            name: "bad".to_string(),
            size: 0,
        };
        assert!(manager.set_config(&bad).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());

        let good = SampleConfig {
            name: "good".to_string(),
            size: 7,
        };
        assert!(manager.set_config(&good).is_ok());
        assert_eq!(manager.get_config(), Ok(good));
        assert!(manager.config_content_provider.content.borrow().is_some());
    }
}
