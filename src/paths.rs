//! Filesystem locations used by todobar
//!
//! ```text
//! ~/.config/todobar/
//! └── config.toml               # Optional user configuration
//! ```
//!
//! On macOS `dirs::config_dir()` resolves to `~/Library/Application Support`.

use std::path::PathBuf;

/// Config directory name
const CONFIG_DIR: &str = "todobar";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the todobar config directory.
///
/// Falls back to the home directory, then the current directory, when the
/// platform has no config location.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
