use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 480.0,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(200.0..=4096.0).contains(&self.width) {
            return Err("Window width must be between 200 and 4096".to_string());
        }
        if !(200.0..=4096.0).contains(&self.height) {
            return Err("Window height must be between 200 and 4096".to_string());
        }
        Ok(())
    }
}
