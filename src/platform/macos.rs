// Markd platform paths for macOS
// Config:           ~/Library/Application Support/Markd
// Shared container: ~/Library/Group Containers/<group_id>

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Markd on macOS.
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Markd")
}

/// Returns the shared container directory for a group identifier on macOS.
/// Mirrors the system's app-group container layout.
pub fn get_shared_container_dir(group_id: &str) -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Group Containers")
        .join(group_id)
}
