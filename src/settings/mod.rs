//! TOML settings stored in the application directory.

mod errors;
mod load;
mod types;


/// Default filename used to store the app settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use load::{config_path, load_or_default, load_settings_from};
pub use types::{AppSettings, ModelSettings, UiSettings};
