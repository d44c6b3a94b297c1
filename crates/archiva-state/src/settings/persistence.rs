use std::path::PathBuf;

use super::errors::SettingsError;
use super::types::{PersistedSettings, SettingsData};

/// Load persisted settings from ~/.archiva/state.json.
///
/// Falls back to `./.archiva/state.json` if home directory cannot be
/// determined. Returns empty data if the file doesn't exist, and empty data
/// with a user-facing `load_error` if it exists but cannot be used.
pub fn load_settings() -> SettingsData {
    let path = settings_file_path();
    if !path.exists() {
        return SettingsData::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<PersistedSettings>(&content) {
            Ok(settings) => SettingsData {
                settings: Some(settings.normalized()),
                load_error: None,
            },
            Err(e) => {
                // ERROR (not warn): file exists but is corrupted — indicates
                // data loss or external tampering, requires user action.
                tracing::error!(
                    event = "store.settings.json_parse_failed",
                    path = %path.display(),
                    error = %e,
                    "Settings file exists but contains invalid JSON - UI preferences lost"
                );
                SettingsData {
                    settings: None,
                    load_error: Some(format!(
                        "Settings file corrupted ({}). Your UI preferences could not be loaded. \
                         Delete {} to reset.",
                        e,
                        path.display()
                    )),
                }
            }
        },
        Err(e) => {
            // ERROR (not warn): file exists but can't be read — likely a
            // permission issue or filesystem problem requiring user action.
            tracing::error!(
                event = "store.settings.load_failed",
                path = %path.display(),
                error = %e
            );
            SettingsData {
                settings: None,
                load_error: Some(format!(
                    "Failed to read settings file: {}. Check permissions on {}",
                    e,
                    path.display()
                )),
            }
        }
    }
}

/// Save persisted settings to ~/.archiva/state.json
pub fn save_settings(settings: &PersistedSettings) -> Result<(), SettingsError> {
    let path = settings_file_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(|e| SettingsError::SaveFailed {
        message: format!("Failed to serialize settings: {}", e),
    })?;

    std::fs::write(&path, json).map_err(|e| SettingsError::SaveFailed {
        message: format!("Failed to write settings file ({}): {}", path.display(), e),
    })?;

    tracing::debug!(
        event = "store.settings.saved",
        path = %path.display()
    );

    Ok(())
}

fn settings_file_path() -> PathBuf {
    // Allow override via env var for testing.
    if let Ok(path_str) = std::env::var("ARCHIVA_STATE_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".archiva").join("state.json"),
        None => {
            tracing::error!(
                event = "store.settings.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".archiva").join("state.json")
        }
    }
}

/// Test utilities for settings persistence.
///
/// Public so integration tests can use the env lock/guard.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify ARCHIVA_STATE_FILE env var.
    pub static STATE_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes ARCHIVA_STATE_FILE env var on drop.
    pub struct StateFileEnvGuard;

    impl StateFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold STATE_FILE_ENV_LOCK to serialize access
            // from Rust test code. This is inherently unsafe as other threads or
            // C code could read the environment, but acceptable in test-only code.
            unsafe { std::env::set_var("ARCHIVA_STATE_FILE", path) };
            Self
        }
    }

    impl Drop for StateFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold STATE_FILE_ENV_LOCK throughout guard
            // lifetime. See safety comment in new().
            unsafe { std::env::remove_var("ARCHIVA_STATE_FILE") };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::chrome::Theme;
    use crate::nodes::ViewMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_missing_file() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let _guard = StateFileEnvGuard::new(&temp_dir.path().join("absent.json"));

        let data = load_settings();
        assert!(data.settings.is_none());
        assert!(data.load_error.is_none());
    }

    #[test]
    fn test_settings_file_path_env_override() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("custom_state.json");

        let _guard = StateFileEnvGuard::new(&custom_path);

        let path = super::settings_file_path();
        assert_eq!(path, custom_path);
    }

    #[test]
    fn test_settings_file_path_default_after_cleanup() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        // SAFETY: We hold STATE_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::remove_var("ARCHIVA_STATE_FILE") };

        let default_path = super::settings_file_path();
        assert!(default_path.ends_with("state.json"));
        assert!(default_path.to_string_lossy().contains(".archiva"));
    }

    #[test]
    fn test_settings_file_path_empty_env_var_uses_default() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        // SAFETY: We hold STATE_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::set_var("ARCHIVA_STATE_FILE", "") };

        let path = super::settings_file_path();
        assert!(path.ends_with("state.json"));
        assert!(path.to_string_lossy().contains(".archiva"));

        // SAFETY: We hold STATE_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::remove_var("ARCHIVA_STATE_FILE") };
    }

    #[test]
    fn test_save_and_load_roundtrip_with_env_override() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("state.json");
        let _guard = StateFileEnvGuard::new(&custom_path);

        let settings = PersistedSettings {
            theme: Theme::Light,
            sidebar_collapsed: true,
            view_mode: ViewMode::Grid,
            main_panel_width_pct: 72.0,
            ..Default::default()
        };
        save_settings(&settings).expect("save should succeed");

        assert!(custom_path.exists(), "File should exist at custom path");

        let loaded = load_settings();
        assert_eq!(loaded.settings, Some(settings));
        assert!(loaded.load_error.is_none());
    }

    #[test]
    fn test_load_corrupted_json_returns_error() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("corrupted.json");
        std::fs::write(&custom_path, "{ this is not valid json }").unwrap();
        let _guard = StateFileEnvGuard::new(&custom_path);

        let data = load_settings();
        assert!(data.settings.is_none());
        assert!(data.load_error.is_some());
        assert!(data.load_error.unwrap().contains("corrupted"));
    }

    #[test]
    fn test_load_unreadable_file_returns_error() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("state.json");
        // Create a directory where a file is expected — causes a read error
        std::fs::create_dir_all(&custom_path).unwrap();
        let _guard = StateFileEnvGuard::new(&custom_path);

        let data = load_settings();
        assert!(data.settings.is_none());
        assert!(data.load_error.is_some());
    }

    #[test]
    fn test_save_settings_creates_parent_directory() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("subdir").join("state.json");
        let _guard = StateFileEnvGuard::new(&custom_path);

        let result = save_settings(&PersistedSettings::default());

        assert!(result.is_ok(), "Should create parent directory");
        assert!(custom_path.exists());
    }

    #[test]
    fn test_load_clamps_hand_edited_width() {
        let _lock = STATE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("state.json");
        std::fs::write(&custom_path, r#"{"main_panel_width_pct": 140.0}"#).unwrap();
        let _guard = StateFileEnvGuard::new(&custom_path);

        let data = load_settings();
        let settings = data.settings.expect("file should load");
        assert_eq!(settings.main_panel_width_pct, 80.0);
    }
}
