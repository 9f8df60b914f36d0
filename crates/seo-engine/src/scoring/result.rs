use serde::{Deserialize, Serialize};

/// Outcome class of a single field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Good,
    Warning,
    Error,
    /// The rule does not apply to this record; never scored.
    Info,
}

impl ValidationStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Good, Self::Warning, Self::Error, Self::Info]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

/// Status, message and score produced by one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub message: String,
    pub score: u32,
}

impl ValidationResult {
    pub fn good(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Good,
            message: message.into(),
            score,
        }
    }

    pub fn warning(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Warning,
            message: message.into(),
            score,
        }
    }

    pub fn error(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Error,
            message: message.into(),
            score,
        }
    }

    /// Not-applicable result; always carries a zero score.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Info,
            message: message.into(),
            score: 0,
        }
    }

    pub fn is_good(&self) -> bool {
        self.status == ValidationStatus::Good
    }
}
