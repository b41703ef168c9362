//! Error types returned by every fallible operation of the client

use std::fmt;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
pub enum AppError {
    /// The login endpoint rejected the submitted email/password (remote code 61).
    ///
    /// The submitted credentials are kept for caller diagnostics. Neither
    /// `Display` nor `Debug` prints them.
    WrongCredentials {
        /// Remote error code
        code: i64,
        /// Remote error description
        description: String,
        /// Email that was submitted
        email: String,
        /// Password that was submitted
        password: String,
    },
    /// Any other non-zero remote `errorCode`
    Api {
        /// Remote error code
        code: i64,
        /// Remote error description, verbatim
        description: String,
    },
    /// Caller-side precondition failure
    InvalidInput(String),
    /// Transport failure reported by the HTTP client
    Network(reqwest::Error),
    /// Response body was not valid JSON
    Json(serde_json::Error),
    /// Valid JSON that could not be mapped into a domain record
    Deserialization(String),
}

impl AppError {
    /// Remote error code carried by this error, if it came from the API
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            AppError::WrongCredentials { code, .. } | AppError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Remote error description carried by this error, if it came from the API
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            AppError::WrongCredentials { description, .. }
            | AppError::Api { description, .. } => Some(description),
            _ => None,
        }
    }

    /// Whether the login was refused because of wrong credentials
    #[must_use]
    pub fn is_wrong_credentials(&self) -> bool {
        matches!(self, AppError::WrongCredentials { .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::WrongCredentials {
                code, description, ..
            } => write!(f, "wrong credentials: {code}: {description}"),
            AppError::Api { code, description } => write!(f, "api error {code}: {description}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::WrongCredentials {
                code,
                description,
                email,
                ..
            } => f
                .debug_struct("WrongCredentials")
                .field("code", code)
                .field("description", description)
                .field("email", &format_args!("<{} chars>", email.len()))
                .field("password", &format_args!("<redacted>"))
                .finish(),
            AppError::Api { code, description } => f
                .debug_struct("Api")
                .field("code", code)
                .field("description", description)
                .finish(),
            AppError::InvalidInput(msg) => f.debug_tuple("InvalidInput").field(msg).finish(),
            AppError::Network(e) => f.debug_tuple("Network").field(e).finish(),
            AppError::Json(e) => f.debug_tuple("Json").field(e).finish(),
            AppError::Deserialization(msg) => {
                f.debug_tuple("Deserialization").field(msg).finish()
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
