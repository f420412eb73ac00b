/// Fallback text shown when a failure carries no usable message.
pub const FALLBACK_LOAD_MESSAGE: &str = "failed to load data";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// The data service answered with a structured error body.
    #[error("Service error {status}: {message}")]
    Service { status: u16, message: String },

    /// Non-success response without a structured message.
    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Message surfaced to the user when a load fails.
    ///
    /// Prefers the service's own message, then the transport-level description,
    /// then [`FALLBACK_LOAD_MESSAGE`].
    pub fn load_message(&self) -> String {
        let service = match self {
            Self::Service { message, .. } => Some(message.as_str()),
            _ => None,
        };
        let transport = match self {
            Self::Service { status, .. } => Some(Self::Status(*status).to_string()),
            Self::Status(_) => Some(self.to_string()),
            Self::Transport(msg) | Self::DataError(msg) | Self::ConfigError(msg) => {
                Some(msg.clone())
            }
        };

        service
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(ToString::to_string)
            .or_else(|| transport.filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_LOAD_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_wins() {
        let error = AppError::Service {
            status: 503,
            message: "prices are being recalculated".to_string(),
        };
        assert_eq!(error.load_message(), "prices are being recalculated");
    }

    #[test]
    fn test_status_message_is_generic() {
        assert_eq!(
            AppError::Status(500).load_message(),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_blank_messages_fall_through() {
        let blank_service = AppError::Service {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(
            blank_service.load_message(),
            "Request failed with status code 500"
        );
        assert_eq!(
            AppError::Transport(String::new()).load_message(),
            FALLBACK_LOAD_MESSAGE
        );
    }
}
