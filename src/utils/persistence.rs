//! Locations under ~/.gopher-jump/ for optional user files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".gopher-jump";
pub const TUNING_FILE_NAME: &str = "tuning.json";

/// Get the ~/.gopher-jump/ directory path without creating it.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR_NAME))
}

/// Default tuning file location. The file itself is optional.
pub fn default_tuning_path() -> io::Result<PathBuf> {
    Ok(app_dir()?.join(TUNING_FILE_NAME))
}

/// Create a file for writing, creating missing parent directories.
pub fn create_with_parents(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::File::create(path)
}
