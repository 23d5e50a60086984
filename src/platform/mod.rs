// Markd platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the process-local configuration directory for Markd.
///
/// Holds state owned by the app process alone (subscription/trial state).
///
/// - **Linux**: `~/.config/markd` (or `$XDG_CONFIG_HOME/markd`)
/// - **macOS**: `~/Library/Application Support/Markd`
/// - **Windows**: `%APPDATA%/Markd`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the shared container directory for the given group identifier.
///
/// Both the extension and the app process resolve their shared storage here;
/// the same `group_id` must yield the same directory in every build artifact.
///
/// - **Linux**: `~/.local/share/app-groups/<group_id>` (or `$XDG_DATA_HOME/app-groups/<group_id>`)
/// - **macOS**: `~/Library/Group Containers/<group_id>`
/// - **Windows**: `%APPDATA%/AppGroups/<group_id>`
pub fn get_shared_container_dir(group_id: &str) -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_shared_container_dir(group_id)
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_shared_container_dir(group_id)
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_shared_container_dir(group_id)
    }
}
