//! Document store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which DocumentStore adapter backs the service.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    /// YAML files under `data_dir`
    File,
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StoreBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingDataDir);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/store")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory_backend() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_backend_needs_a_directory() {
        let config = StoreConfig {
            backend: StoreBackend::File,
            data_dir: PathBuf::new(),
        };
        assert!(matches!(config.validate(), Err(ValidationError::MissingDataDir)));
    }

    #[test]
    fn memory_backend_ignores_empty_directory() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }
}
