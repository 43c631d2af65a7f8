use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CertError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CertError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CertError::ValidationError { .. } => ErrorCategory::Input,
            CertError::ConfigError { .. }
            | CertError::InvalidConfigValueError { .. }
            | CertError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CertError::RenderError { .. } | CertError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            CertError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤可以直接修正後重試
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不包含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            CertError::ValidationError { message, .. } => message.clone(),
            CertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CertError::ConfigError { message } => format!("Configuration problem: {}", message),
            CertError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CertError::RenderError { .. } | CertError::SerializationError(_) => {
                "Erro ao gerar certificado. Tente novamente.".to_string()
            }
            CertError::IoError(e) => format!("Could not write the certificate file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CertError::ValidationError { field, .. } => match field.as_str() {
                "cpf" => "Check the 11 CPF digits, punctuation is optional",
                "email" => "Use an address like nome@dominio.com",
                "course_type" => "Pick one of the offerings listed by --list-courses",
                _ => "Fill in every form field and try again",
            },
            CertError::InvalidConfigValueError { .. }
            | CertError::ConfigValidationError { .. }
            | CertError::ConfigError { .. } => {
                "Review the TOML configuration file and command line flags"
            }
            CertError::RenderError { .. } | CertError::SerializationError(_) => {
                "Retry the generation; if it keeps failing, report the input used"
            }
            CertError::IoError(_) => "Make sure the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CertError>;
