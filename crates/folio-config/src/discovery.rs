//! Configuration file discovery.
//!
//! Looks for `.folio.toml` in the working directory first, then falls
//! back to the global `~/.folio.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".folio.toml";

/// Finds the configuration file relevant to the given directory.
///
/// A `.folio.toml` in `cwd` itself wins; otherwise the global
/// `~/.folio.toml` is used if it exists. Returns `None` when neither
/// file is present.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }
    global_config_path().filter(|path| path.is_file())
}

/// Returns the path to the global configuration file (`~/.folio.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn local_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join(CONFIG_FILENAME);
        fs::write(&config, "page_size = 5\n").unwrap();

        assert_eq!(discover_config_file(dir.path()), Some(config));
    }

    #[test]
    fn missing_local_falls_back_to_global_or_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover_config_file(dir.path());
        if let Some(path) = found {
            assert!(is_global_config(&path));
        }
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();

        let found = discover_config_file(dir.path());
        assert!(found.is_none_or(|path| is_global_config(&path)));
    }

    #[test]
    fn global_config_path_ends_with_filename() {
        let path = global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with(CONFIG_FILENAME));
    }
}
