// Markd platform paths for Windows
// Config:           %APPDATA%/Markd
// Shared container: %APPDATA%/AppGroups/<group_id>

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Markd on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Markd")
}

/// Returns the shared container directory for a group identifier on Windows.
pub fn get_shared_container_dir(group_id: &str) -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("AppGroups").join(group_id)
}
