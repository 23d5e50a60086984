// Markd platform paths for Linux
// Config:           ~/.config/markd
// Shared container: ~/.local/share/app-groups/<group_id>

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Markd on Linux.
/// Uses `$XDG_CONFIG_HOME/markd` if set, otherwise `~/.config/markd`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("markd")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("markd")
    }
}

/// Returns the shared container directory for a group identifier on Linux.
/// Uses `$XDG_DATA_HOME/app-groups/<group_id>` if set, otherwise
/// `~/.local/share/app-groups/<group_id>`.
pub fn get_shared_container_dir(group_id: &str) -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("app-groups").join(group_id)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("app-groups")
            .join(group_id)
    }
}
