//! Centralized path definitions for cartwise
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.cartwise/
//! └── engine.toml               # Engine tunables (threshold, travel cost)
//! ```

use std::path::PathBuf;

/// User config directory name
const USER_DIR: &str = ".cartwise";

/// Engine config filename
const ENGINE_CONFIG_FILE: &str = "engine.toml";

/// Get the user-level cartwise directory.
///
/// Returns `~/.cartwise/`.
#[must_use]
pub fn user_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(USER_DIR)
}

/// Get the user-level engine config path.
///
/// Returns `~/.cartwise/engine.toml`.
#[must_use]
pub fn user_engine_config() -> PathBuf {
    user_config_dir().join(ENGINE_CONFIG_FILE)
}
