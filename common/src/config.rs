use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::sync::Mutex;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// A YAML config stored in a single file, with an in-memory cache of the
/// last loaded or saved value. A missing file is not an error: `load`
/// falls back to the default config.
pub struct ConfigFile<TConfig> {
    file_path: String,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigFile<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
