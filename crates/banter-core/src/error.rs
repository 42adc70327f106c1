use thiserror::Error;

/// Main error type for Banter operations
#[derive(Error, Debug, Clone)]
pub enum BanterError {
    /// A required constructor input was missing
    #[error("Invalid argument: {parameter} is required")]
    InvalidArgument { parameter: String },

    /// Malformed value
    #[error("Invalid: {0}")]
    Invalid(String),

    /// Telemetry backend errors
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Knowledge-base query errors
    #[error("QnA service error: {service}: {message}")]
    QnaService { service: String, message: String },

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Standard Result type used across Banter
pub type BanterResult<T> = Result<T, BanterError>;

/// Convenience macros for creating errors
#[macro_export]
macro_rules! invalid_argument {
    ($parameter:expr) => {
        $crate::error::BanterError::InvalidArgument {
            parameter: $parameter.to_string(),
        }
    };
}

#[macro_export]
macro_rules! telemetry_error {
    ($msg:expr) => {
        $crate::error::BanterError::Telemetry($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::BanterError::Telemetry(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! qna_error {
    ($service:expr, $msg:expr) => {
        $crate::error::BanterError::QnaService {
            service: $service.to_string(),
            message: $msg.to_string(),
        }
    };
    ($service:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::error::BanterError::QnaService {
            service: $service.to_string(),
            message: format!($fmt, $($arg)*),
        }
    };
}
