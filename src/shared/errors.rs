use thiserror::Error;

use crate::config::ConfigError;
use crate::infrastructure::record_service::RecordServiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record service error: {0}")]
    RecordService(#[from] RecordServiceError),

    #[error("Sermon not found: {0}")]
    SermonNotFound(String),
}

impl AppError {
    /// Message shown to the reader in page error panels
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) => "The application is not configured correctly.".to_string(),
            AppError::SermonNotFound(_) => "This sermon could not be found.".to_string(),
            AppError::RecordService(RecordServiceError::Api { status: 404, .. }) => {
                "This sermon could not be found.".to_string()
            }
            AppError::RecordService(_) => {
                "Failed to load sermons. Please try again later.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let not_found = AppError::from(RecordServiceError::Api { status: 404, message: "missing".into() });
        assert_eq!(not_found.user_message(), "This sermon could not be found.");

        let network = AppError::from(RecordServiceError::Network("offline".into()));
        assert_eq!(network.user_message(), "Failed to load sermons. Please try again later.");
        assert_eq!(network.to_string(), "Record service error: Network error: offline");

        let config = AppError::from(ConfigError::MissingApiUrl);
        assert!(config.to_string().starts_with("Configuration error"));
    }
}
