mod config;
mod window_config;

pub use config::{Config, get_config_file};
pub use window_config::WindowConfig;
