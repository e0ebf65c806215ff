//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "sandbox";
const APPLICATION: &str = "sandbox-demo";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/sandbox-demo` or `~/.config/sandbox-demo`
/// - macOS: `~/Library/Application Support/dev.sandbox.sandbox-demo`
/// - Windows: `C:\Users\<User>\AppData\Roaming\sandbox\sandbox-demo\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path of the default config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}
