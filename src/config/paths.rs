//! Path management for UniCash
//!
//! Resolves where the data and preferences files live.
//!
//! ## Path Resolution Order
//!
//! 1. `UNICASH_DATA_DIR` environment variable (if set)
//! 2. The platform data directory, e.g. `~/.local/share/unicash` on
//!    Linux or `%APPDATA%\unicash\data` on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::UniCashError;

/// Manages all paths used by UniCash
#[derive(Debug, Clone)]
pub struct UniCashPaths {
    /// Base directory for all UniCash files
    base_dir: PathBuf,
}

impl UniCashPaths {
    /// Create a new UniCashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, UniCashError> {
        let base_dir = if let Ok(custom) = std::env::var("UNICASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create UniCashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the data file
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the transaction data file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir().join("unicash.json")
    }

    /// Path to the user preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), UniCashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| UniCashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| UniCashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, UniCashError> {
    let project_dirs = ProjectDirs::from("", "", "unicash").ok_or_else(|| {
        UniCashError::Config("Could not determine a home directory for UniCash data".into())
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UniCashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.data_file(),
            temp_dir.path().join("data").join("unicash.json")
        );
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("UNICASH_DATA_DIR", custom_path);

        let paths = UniCashPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("UNICASH_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UniCashPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
