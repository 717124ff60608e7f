use crate::domain::model::InputKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("The {input} input is empty")]
    EmptyInput { input: InputKind },

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Argument error: {message}")]
    ArgumentError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Configuration,
}

impl CipherError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput { .. } => ErrorCategory::Input,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ArgumentError { .. }
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyInput { input } => format!("Why is your {} file empty?", input),
            Self::IoError { path, source } => {
                format!("Can't access file '{}': {}", path, source)
            }
            Self::ArgumentError { message } => format!("Invalid arguments: {}", message),
            Self::ConfigError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::MissingConfigError { field } => {
                format!("No value given for {}", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EmptyInput { input: InputKind::PlainText } => {
                "Put the text to encrypt into the plaintext file"
            }
            Self::EmptyInput { input: InputKind::Key } => {
                "Put at least one key character into the key file"
            }
            Self::EmptyInput { input: InputKind::Alphabet } => {
                "Put the alphabet symbols into the alphabet file"
            }
            Self::IoError { .. } => "Check that the path exists and that you have permission to use it",
            Self::ArgumentError { .. } | Self::MissingConfigError { .. } => {
                "Pass -k <key file> -a <alphabet file> -t <plaintext file>, or see --help"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
