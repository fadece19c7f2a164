use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, LoadedConfig};
    use common::tictactoe::BoardLayout;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_manager() {
        let config = Config {
            window: WindowConfig {
                title: "Noughts and Crosses".to_string(),
                cell_size: 100,
                ..WindowConfig::default()
            },
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);

        assert!(manager.set_config(&config).is_ok());

        let fresh_manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_window_section_keeps_user_values() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("window:\n  cell_size: 100\n")
            .unwrap();
        assert_eq!(
            config.window,
            WindowConfig {
                cell_size: 100,
                ..WindowConfig::default()
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_file_is_stored_not_rejected() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("window: { cell_size: 100, title: \"Noughts\" }\n")
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        match manager.load_or_default() {
            LoadedConfig::Stored(config) => {
                assert_eq!(config.window.cell_size, 100);
                assert_eq!(config.window.title, "Noughts");
                assert_eq!(config.window.board_margin, WindowConfig::default().board_margin);
            }
            other => panic!("expected stored config, got {:?}", other),
        }

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let invalid_config_content = r#"
            window:
              title: "Tic Tac Toe"
              board_margin: 5
              cell_size: 20
              panel_height: 150
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        match manager.load_or_default() {
            LoadedConfig::Rejected { config, error } => {
                assert_eq!(config, Config::default());
                assert!(error.contains("cell_size"));
            }
            other => panic!("expected rejected config, got {:?}", other),
        }

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_default_window_matches_classic_geometry() {
        let layout = BoardLayout::new(Config::default().window.layout_settings());
        assert_eq!(layout.window_size(), (400, 550));
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let config = Config {
            window: WindowConfig {
                title: "  ".to_string(),
                ..WindowConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
