use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Unknown document type")]
    UnknownDocumentType { doc_type: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    Configuration,
    Io,
}

impl FactoryError {
    pub fn unknown_document_type<S: Into<String>>(doc_type: S) -> Self {
        Self::UnknownDocumentType {
            doc_type: doc_type.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDocumentType { .. } => ErrorCategory::InvalidArgument,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    /// Message for the terminal; `Display` stays terse for callers that match on it.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnknownDocumentType { doc_type } => format!(
                "{} '{}' (expected one of: {})",
                self,
                doc_type,
                crate::domain::model::DocumentKind::tags().join(", ")
            ),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::InvalidArgument => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io => 3,
        }
    }
}

/// Exit code for command-line usage errors, kept apart from the error categories above.
pub const USAGE_EXIT_CODE: i32 = 64;

pub type Result<T> = std::result::Result<T, FactoryError>;
