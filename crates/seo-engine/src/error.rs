use crate::config::ConfigError;
use crate::record::RecordError;
use crate::telemetry::TelemetryError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Input {
        path: PathBuf,
        source: InputError,
    },
    Report(std::io::Error),
    Output(serde_json::Error),
}

/// Reasons a record document could not be used.
#[derive(Debug)]
pub enum InputError {
    Json(serde_json::Error),
    Record(RecordError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Json(err) => write!(f, "{err}"),
            InputError::Record(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Json(err) => Some(err),
            InputError::Record(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn input(path: impl Into<PathBuf>, source: impl Into<InputError>) -> Self {
        Self::Input {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input { path, source } => {
                write!(f, "invalid input {}: {}", path.display(), source)
            }
            AppError::Report(err) => write!(f, "report export error: {}", err),
            AppError::Output(err) => write!(f, "output serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input { source, .. } => Some(source),
            AppError::Report(err) => Some(err),
            AppError::Output(err) => Some(err),
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

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RecordError> for InputError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_carry_the_path() {
        let parse = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let err = AppError::input("records/acme.json", parse);
        let message = err.to_string();
        assert!(message.starts_with("invalid input records/acme.json:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn serialization_failures_are_output_errors() {
        let failure = serde_json::from_str::<u8>("-1").expect_err("negative byte fails");
        let err = AppError::from(failure);
        assert!(matches!(err, AppError::Output(_)));
        assert!(err.to_string().starts_with("output serialization error:"));
    }

    #[test]
    fn record_shape_errors_convert() {
        let err = AppError::input(
            "list.json",
            RecordError::NotAnObject { found: "array" },
        );
        assert!(err.to_string().contains("found array"));
    }
}
