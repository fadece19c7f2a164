mod config;
mod window_config;

pub use config::{get_config_manager, Config};
pub use window_config::WindowConfig;
