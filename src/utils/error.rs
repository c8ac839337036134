use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    /// Argument has the wrong kind (not a list, not an integer, not callable)
    #[error("{message}")]
    TypeError { message: String },

    /// Argument has the right kind but an unusable value
    #[error("{message}")]
    ValueError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
    Config,
    Io,
}

impl UtilsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        Self::ValueError {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeError { .. } => ErrorKind::Type,
            Self::ValueError { .. } => ErrorKind::Value,
            // malformed JSON input is a bad argument, not a broken system
            Self::SerializationError(_) => ErrorKind::Value,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
            Self::IoError(_) => ErrorKind::Io,
        }
    }

    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config => 1,
            ErrorKind::Type | ErrorKind::Value => 2,
            ErrorKind::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
