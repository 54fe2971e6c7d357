//! Path helpers for the `.sightsee` directory.

use std::path::PathBuf;

/// Environment variable that relocates the `.sightsee` directory.
pub const ROOT_ENV_VAR: &str = "SIGHTSEE_ROOT";

/// Returns the root directory for sightsee state.
///
/// Honors `SIGHTSEE_ROOT` when set, otherwise `.sightsee` in the working directory.
pub fn sightsee_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR)
        && !root.is_empty()
    {
        PathBuf::from(root)
    } else {
        PathBuf::from(".sightsee")
    }
}

/// Returns the path to the config file.
pub fn config_file() -> PathBuf {
    sightsee_root().join("config.yaml")
}
