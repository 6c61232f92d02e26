use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("Resource '{path}' is unavailable: {reason}")]
    ResourceUnavailable { path: String, reason: String },

    #[error("Unknown task: {name}")]
    UnknownTask { name: String },

    #[error("Task '{name}' is already registered")]
    DuplicateTask { name: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
    Resource,
    Task,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed invocation.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ShadowError {
    pub fn resource_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ShadowError::ResourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ShadowError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ShadowError::ResourceUnavailable { .. } => ErrorCategory::Resource,
            ShadowError::UnknownTask { .. } | ShadowError::DuplicateTask { .. } => {
                ErrorCategory::Task
            }
            ShadowError::ConfigError { .. }
            | ShadowError::InvalidConfigValueError { .. }
            | ShadowError::TomlError(_) => ErrorCategory::Configuration,
            ShadowError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Resource => ErrorSeverity::High,
            ErrorCategory::Task => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShadowError::ResourceUnavailable { path, .. } => format!(
                "Check that '{}' exists, or drop --resource-dir to use the bundled copy",
                path.trim_start_matches('/')
            ),
            ShadowError::UnknownTask { .. } => {
                "Run with --list to see the available tasks".to_string()
            }
            ShadowError::DuplicateTask { .. } => {
                "Give each task a unique name before registering it".to_string()
            }
            ShadowError::ConfigError { .. }
            | ShadowError::InvalidConfigValueError { .. }
            | ShadowError::TomlError(_) => {
                "Review the configuration file and command-line flags".to_string()
            }
            ShadowError::SerializationError(_) => {
                "This is likely a bug; rerun with --verbose and report it".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShadowError::ResourceUnavailable { path, .. } => {
                format!("Could not load the banner resource '{}'", path)
            }
            ShadowError::UnknownTask { name } => format!("There is no task named '{}'", name),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShadowError>;
