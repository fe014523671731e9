use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Pokemon not found: {name}")]
    NotFound { name: String },

    #[error("Unexpected response status {status} while fetching '{name}'")]
    UnexpectedStatus { name: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run whose worst failure had this severity.
    ///
    /// `Low` (a name the service does not know) is reported as a warning and
    /// still exits 0, even when every requested name was missing.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PokedexError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PokedexError::NotFound { .. } => ErrorSeverity::Low,
            PokedexError::ApiError(_) => ErrorSeverity::Medium,
            PokedexError::UnexpectedStatus { status, .. } if *status >= 500 => {
                ErrorSeverity::Medium
            }
            PokedexError::UnexpectedStatus { .. } | PokedexError::SerializationError(_) => {
                ErrorSeverity::High
            }
            PokedexError::IoError(_)
            | PokedexError::ConfigError { .. }
            | PokedexError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PokedexError::NotFound { .. } => "Check the spelling of the Pokemon name",
            PokedexError::ApiError(_) => "Check network connectivity and the API base URL",
            PokedexError::UnexpectedStatus { status, .. } if *status >= 500 => {
                "The lookup service is unavailable, try again later"
            }
            PokedexError::UnexpectedStatus { .. } => "Verify the API base URL points at a PokeAPI-compatible service",
            PokedexError::SerializationError(_) => "Failed to write the record as JSON, check the output stream",
            PokedexError::IoError(_) => "Check file paths and permissions",
            PokedexError::ConfigError { .. } | PokedexError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
