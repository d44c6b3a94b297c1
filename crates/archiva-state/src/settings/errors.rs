use crate::errors::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to save settings: {message}")]
    SaveFailed { message: String },
}

impl AppError for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            SettingsError::SaveFailed { .. } => "SETTINGS_SAVE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_failed_display_and_code() {
        let err = SettingsError::SaveFailed {
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to save settings: disk full");
        assert_eq!(err.error_code(), "SETTINGS_SAVE_FAILED");
        assert!(!err.is_user_error());
    }
}
