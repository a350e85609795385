use crate::config::ConfigError;
use crate::screening::ScreeningError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Screening(ScreeningError),
    Report(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Screening(err) => write!(f, "screening error: {}", err),
            AppError::Report(err) => write!(f, "report serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Screening(err) => Some(err),
            AppError::Report(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScreeningError> for AppError {
    fn from(value: ScreeningError) -> Self {
        Self::Screening(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Report(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn screening_errors_keep_their_source() {
        let err = AppError::from(ScreeningError::IncompleteRequest);
        assert!(err.to_string().starts_with("screening error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn config_errors_are_prefixed() {
        let err = AppError::from(ConfigError::InvalidPort);
        assert_eq!(
            err.to_string(),
            "configuration error: APP_PORT must be a valid u16"
        );
    }

    #[test]
    fn report_errors_propagate_through_question_mark() {
        fn render() -> Result<String, AppError> {
            let value: serde_json::Value = serde_json::from_str("{\"risk_level\": ")?;
            Ok(value.to_string())
        }

        let err = render().expect_err("truncated report");
        assert!(matches!(err, AppError::Report(_)));
        assert!(err.to_string().starts_with("report serialization error:"));
        assert!(err.source().is_some());
    }
}
