use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
    fn location(&self) -> String;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!(
                    "Failed to read config file {}: {}",
                    self.file_path.display(),
                    err
                )),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_written_content_reads_back() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());

        assert!(provider.set_config_content("window:\n  cell_size: 120\n").is_ok());
        assert_eq!(
            provider.get_config_content(),
            Ok(Some("window:\n  cell_size: 120\n".to_string()))
        );
        assert_eq!(provider.location(), file_path.display().to_string());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let provider = FileContentConfigProvider::new(std::env::temp_dir());
        assert!(provider.get_config_content().is_err());
    }
}
