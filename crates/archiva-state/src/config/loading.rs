//! Configuration loading.
//!
//! Loads the user config from `~/.archiva/config.toml`. A missing file is
//! not an error; an unreadable or unparsable file is, so the embedding
//! application can tell the user instead of silently ignoring their config.

use std::path::PathBuf;

use crate::config::types::ArchivaConfig;
use crate::errors::ConfigError;

/// Load the user configuration, falling back to defaults when no config
/// file exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<ArchivaConfig, ConfigError> {
    let path = config_file_path();
    if !path.exists() {
        return Ok(ArchivaConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config: ArchivaConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    tracing::debug!(
        event = "store.config.loaded",
        path = %path.display()
    );

    Ok(config)
}

fn config_file_path() -> PathBuf {
    // Allow override via env var for testing.
    if let Ok(path_str) = std::env::var("ARCHIVA_CONFIG_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".archiva").join("config.toml"),
        None => {
            tracing::error!(
                event = "store.config.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".archiva").join("config.toml")
        }
    }
}

/// Test utilities for config loading.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify ARCHIVA_CONFIG_FILE env var.
    pub static CONFIG_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes ARCHIVA_CONFIG_FILE env var on drop.
    pub struct ConfigFileEnvGuard;

    impl ConfigFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold CONFIG_FILE_ENV_LOCK to serialize access
            // from Rust test code. This is inherently unsafe as other threads or
            // C code could read the environment, but acceptable in test-only code.
            unsafe { std::env::set_var("ARCHIVA_CONFIG_FILE", path) };
            Self
        }
    }

    impl Drop for ConfigFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold CONFIG_FILE_ENV_LOCK throughout guard
            // lifetime. See safety comment in new().
            unsafe { std::env::remove_var("ARCHIVA_CONFIG_FILE") };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::chrome::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_missing_file_returns_defaults() {
        let _lock = CONFIG_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        let _guard = ConfigFileEnvGuard::new(&missing);

        let config = load_config().expect("missing file is not an error");
        assert_eq!(config.ui.default_theme, Theme::Dark);
    }

    #[test]
    fn test_load_config_reads_env_override() {
        let _lock = CONFIG_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndefault_theme = \"light\"\n").unwrap();
        let _guard = ConfigFileEnvGuard::new(&path);

        let config = load_config().unwrap();
        assert_eq!(config.ui.default_theme, Theme::Light);
    }

    #[test]
    fn test_load_config_invalid_toml_is_an_error() {
        let _lock = CONFIG_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not = [ valid").unwrap();
        let _guard = ConfigFileEnvGuard::new(&path);

        let err = load_config().unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_file_path_default_after_cleanup() {
        let _lock = CONFIG_FILE_ENV_LOCK.lock().unwrap();

        // SAFETY: We hold CONFIG_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::remove_var("ARCHIVA_CONFIG_FILE") };

        let path = super::config_file_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.to_string_lossy().contains(".archiva"));
    }
}
